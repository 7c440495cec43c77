//! Drawing contract between the engine and whatever renders it
//!
//! The engine only issues path primitives in particle coordinates. A
//! frontend either draws them immediately or, like [`FrameRecorder`],
//! collects a whole frame first and applies it afterwards.

use std::f64::consts::TAU;

use super::states::{ColorToken, NVec2};

/// Rendering surface primitives, addressed in viewport coordinates
pub trait Canvas {
    fn clear(&mut self, width: f64, height: f64);
    fn begin_path(&mut self);
    fn arc(&mut self, center: NVec2, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self, color: ColorToken, alpha: f64);
    fn stroke(&mut self, color: ColorToken);
    fn close_path(&mut self);
}

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    BeginPath,
    Arc { center: NVec2, radius: f64, start_angle: f64, end_angle: f64 },
    Fill { color: ColorToken, alpha: f64 },
    Stroke { color: ColorToken },
    ClosePath,
}

/// A filled, outlined disc: what one particle draw amounts to
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: NVec2,
    pub radius: f64,
    pub color: ColorToken,
    pub fill_alpha: f64, // 0 when there was no fill
}

/// Canvas that stores every primitive for later replay
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    ops: Vec<DrawOp>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Fold the recorded paths into full circles, in draw order
    ///
    /// Only paths made of a full-turn arc followed by a stroke count;
    /// everything drawn before the last `clear` is discarded.
    pub fn circles(&self) -> Vec<Circle> {
        let mut out = Vec::new();
        let mut arc: Option<(NVec2, f64)> = None;
        let mut fill_alpha = 0.0;

        for op in &self.ops {
            match op {
                DrawOp::Clear { .. } => {
                    out.clear();
                    arc = None;
                }
                DrawOp::BeginPath => {
                    arc = None;
                    fill_alpha = 0.0;
                }
                DrawOp::Arc { center, radius, start_angle, end_angle } => {
                    if (end_angle - start_angle).abs() >= TAU {
                        arc = Some((*center, *radius));
                    }
                }
                DrawOp::Fill { alpha, .. } => fill_alpha = *alpha,
                DrawOp::Stroke { color } => {
                    if let Some((center, radius)) = arc {
                        out.push(Circle {
                            center,
                            radius,
                            color: *color,
                            fill_alpha,
                        });
                    }
                }
                DrawOp::ClosePath => arc = None,
            }
        }
        out
    }

    /// Drop the recorded frame, keeping the allocation
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for FrameRecorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn arc(&mut self, center: NVec2, radius: f64, start_angle: f64, end_angle: f64) {
        self.ops.push(DrawOp::Arc { center, radius, start_angle, end_angle });
    }

    fn fill(&mut self, color: ColorToken, alpha: f64) {
        self.ops.push(DrawOp::Fill { color, alpha });
    }

    fn stroke(&mut self, color: ColorToken) {
        self.ops.push(DrawOp::Stroke { color });
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }
}

/// Canvas that ignores everything (benchmarks, headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _width: f64, _height: f64) {}
    fn begin_path(&mut self) {}
    fn arc(&mut self, _center: NVec2, _radius: f64, _start_angle: f64, _end_angle: f64) {}
    fn fill(&mut self, _color: ColorToken, _alpha: f64) {}
    fn stroke(&mut self, _color: ColorToken) {}
    fn close_path(&mut self) {}
}
