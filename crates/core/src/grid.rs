//! Tile grid and the viewport it is sized from.

use crate::types::{Pos, TileKind};

/// Pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `(cols, rows)` of whole tiles that fit the surface, never below 1×1.
    pub fn grid_size(&self, tile_size: f32) -> (usize, usize) {
        (whole_tiles(self.width, tile_size), whole_tiles(self.height, tile_size))
    }
}

fn whole_tiles(pixels: f32, tile_size: f32) -> usize {
    if !pixels.is_finite() || tile_size <= 0.0 {
        return 1;
    }
    ((pixels / tile_size).floor() as usize).max(1)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn filled(cols: usize, rows: usize, tile: TileKind) -> Self {
        Self { cols, rows, tiles: vec![tile; cols * rows] }
    }

    pub fn walls(cols: usize, rows: usize) -> Self {
        Self::filled(cols, rows, TileKind::Wall)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn center(&self) -> Pos {
        Pos { y: (self.rows / 2) as i32, x: (self.cols / 2) as i32 }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    /// Out-of-bounds cells read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        match self.index(pos) {
            Some(idx) => self.tiles[idx],
            None => TileKind::Wall,
        }
    }

    pub fn is_path(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Path
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx] = tile;
        }
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, TileKind)> + '_ {
        self.tiles.iter().enumerate().map(|(idx, tile)| {
            (Pos { y: (idx / self.cols) as i32, x: (idx % self.cols) as i32 }, *tile)
        })
    }

    pub fn path_count(&self) -> usize {
        self.tiles.iter().filter(|tile| **tile == TileKind::Path).count()
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as usize) * self.cols + (pos.x as usize))
        } else {
            None
        }
    }
}
