//! Scene geometry
//!
//! Turns a [`Session`] into the triangle list the rectangle pipeline draws:
//! one outlined square per trail entry of each player, then the four walls.

use siege_core::{PlayerId, Session};
use siege_math::{Rect, Vec2};

use crate::pipeline::Vertex2D;

/// Colours used to draw a session
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Clear color
    pub background: [f32; 4],
    /// Boundary walls
    pub wall: [f32; 4],
    /// Interior of every player square
    pub fill: [f32; 4],
    /// Outline of player one's and player two's squares
    pub outlines: [[f32; 4]; 2],
    /// Outline thickness in pixels (drawn outside the square)
    pub outline_thickness: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            wall: [1.0, 1.0, 1.0, 1.0],
            fill: [1.0, 1.0, 1.0, 1.0],
            outlines: [[0.0, 0.0, 1.0, 1.0], [1.0, 0.0, 0.0, 1.0]],
            outline_thickness: 1.0,
        }
    }
}

impl Palette {
    /// Outline colour of one player
    pub fn outline(&self, player: PlayerId) -> [f32; 4] {
        self.outlines[player.index()]
    }
}

/// CPU-side vertex data for one frame
#[derive(Clone, Debug, Default)]
pub struct SceneGeometry {
    pub vertices: Vec<Vertex2D>,
}

impl SceneGeometry {
    /// Create empty geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with the current state of a session
    ///
    /// The buffer is reused between frames; only its length changes.
    pub fn rebuild(&mut self, session: &Session, palette: &Palette) {
        self.clear();

        for player in session.players() {
            let outline = palette.outline(player.id());
            for &pos in player.trail().positions() {
                self.add_outlined_rect(
                    &player.bounds_at(pos),
                    palette.fill,
                    outline,
                    palette.outline_thickness,
                );
            }
        }

        for (_side, wall) in session.arena().walls() {
            self.add_rect(wall, palette.wall);
        }
    }

    /// Remove all vertices
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Add a filled rectangle
    pub fn add_rect(&mut self, rect: &Rect, color: [f32; 4]) {
        let top_left = rect.min.to_array();
        let bottom_right = rect.max.to_array();
        let top_right = Vec2::new(rect.max.x, rect.min.y).to_array();
        let bottom_left = Vec2::new(rect.min.x, rect.max.y).to_array();
        self.vertices.extend_from_slice(&[
            Vertex2D::new(top_left, color),
            Vertex2D::new(top_right, color),
            Vertex2D::new(bottom_right, color),
            Vertex2D::new(top_left, color),
            Vertex2D::new(bottom_right, color),
            Vertex2D::new(bottom_left, color),
        ]);
    }

    /// Add a filled rectangle with an outline drawn outside its edges
    pub fn add_outlined_rect(
        &mut self,
        rect: &Rect,
        fill: [f32; 4],
        outline: [f32; 4],
        thickness: f32,
    ) {
        if thickness > 0.0 {
            self.add_rect(&rect.expanded(thickness), outline);
        }
        self.add_rect(rect, fill);
    }
}
