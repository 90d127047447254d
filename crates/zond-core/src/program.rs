//! Linear SDF instruction streams and the builder API that assembles them.
//!
//! A [`Program`] is an append-only sequence of four-float cells. The builder
//! methods are persistent: every call clones its operands into a fresh
//! program and never mutates them, so any sub-expression can be embedded in
//! any number of parents.
//!
//! Combinator cells are emitted *after* their operand streams in the order
//! the evaluator pops them: `a.subtract(&b)` produces `b`'s cells, then
//! `a`'s, then the `Subtract` cell. Transform, scale, onion and material
//! cells come in push/pop pairs wrapped around the stream they affect; the
//! pairs are always balanced by construction.

use crate::op::Op;

/// One instruction: an opcode plus up to three parameters.
///
/// Cells are four floats for interchangeability with GPU consumers of the
/// same stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub op: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Cell {
    fn new(op: Op, x: f32, y: f32, z: f32) -> Self {
        Self {
            op: op.raw(),
            x,
            y,
            z,
        }
    }
}

/// An SDF expression compiled to a flat instruction stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    cells: Vec<Cell>,
}

// ============================================================================
// Shape constructors
// ============================================================================

/// Sphere of radius `r` centered at the origin.
pub fn sphere(r: f32) -> Program {
    Program::single(Cell::new(Op::Sphere, r, 0.0, 0.0))
}

/// Axis-aligned box with half-extents `(rx, ry, rz)`.
pub fn box3(rx: f32, ry: f32, rz: f32) -> Program {
    Program::single(Cell::new(Op::Box3, rx, ry, rz))
}

/// Cylinder of radius `r` extruded along Z with half-height `half_height`.
pub fn cylinder(r: f32, half_height: f32) -> Program {
    Program::single(Cell::new(Op::Cylinder, r, half_height, 0.0))
}

/// Disc sector of radius `r` spanning `aperture` radians to either side of
/// +Y, extruded along Z with half-depth `half_depth`.
pub fn wedge(aperture: f32, r: f32, half_depth: f32) -> Program {
    Program::single(Cell::new(Op::Wedge, aperture, r, half_depth))
}

impl Program {
    fn single(cell: Cell) -> Self {
        Self { cells: vec![cell] }
    }

    /// The raw instruction stream.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the stream.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    fn append(&mut self, other: &Program) {
        self.cells.extend_from_slice(&other.cells);
    }

    // ========================================================================
    // Combinators
    // ========================================================================

    /// Union with `other`. The strictly closer side wins, so `a.union(&b)`
    /// resolves exact ties to `a`.
    pub fn union(&self, other: &Program) -> Program {
        self.union_all(std::iter::once(other))
    }

    /// N-ary union, folding the arguments in left to right.
    pub fn union_all<'a, I>(&self, others: I) -> Program
    where
        I: IntoIterator<Item = &'a Program>,
    {
        let mut out = self.clone();
        for other in others {
            out.append(other);
            out.push(Cell::new(Op::Union, 0.0, 0.0, 0.0));
        }
        out
    }

    /// Smooth union with blend radius `k`.
    pub fn smooth_union(&self, other: &Program, k: f32) -> Program {
        self.combined(other, Cell::new(Op::SmoothUnion, k, 0.0, 0.0))
    }

    /// Carve `other` out of this shape.
    pub fn subtract(&self, other: &Program) -> Program {
        self.combined(other, Cell::new(Op::Subtract, 0.0, 0.0, 0.0))
    }

    /// Carve `other` out of this shape, blending the cut with radius `k`.
    pub fn smooth_subtract(&self, other: &Program, k: f32) -> Program {
        self.combined(other, Cell::new(Op::SmoothSubtract, k, 0.0, 0.0))
    }

    /// Keep only the overlap of this shape and `other`.
    pub fn intersect(&self, other: &Program) -> Program {
        self.combined(other, Cell::new(Op::Intersect, 0.0, 0.0, 0.0))
    }

    // The evaluator pops the receiver first, so the argument's stream is
    // emitted first.
    fn combined(&self, other: &Program, cell: Cell) -> Program {
        let mut out = other.clone();
        out.append(self);
        out.push(cell);
        out
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Move the shape by `(x, y, z)`.
    pub fn translate(&self, x: f32, y: f32, z: f32) -> Program {
        self.transformed(Cell::new(Op::Translate, x, y, z))
    }

    /// Rotate by `angle` radians in the XY plane.
    ///
    /// Rotation cells store the negated angle: the evaluator applies the
    /// stored rotation to the query point, which is the inverse of rotating
    /// the shape.
    pub fn rotate_xy(&self, angle: f32) -> Program {
        self.transformed(Cell::new(Op::RotateXY, -angle, 0.0, 0.0))
    }

    /// Rotate by `angle` radians in the XZ plane.
    pub fn rotate_xz(&self, angle: f32) -> Program {
        self.transformed(Cell::new(Op::RotateXZ, -angle, 0.0, 0.0))
    }

    /// Rotate by `angle` radians in the YZ plane.
    pub fn rotate_yz(&self, angle: f32) -> Program {
        self.transformed(Cell::new(Op::RotateYZ, -angle, 0.0, 0.0))
    }

    /// Stretch the shape's center cross-section by `(x, y, z)`.
    pub fn elongate(&self, x: f32, y: f32, z: f32) -> Program {
        self.transformed(Cell::new(Op::Elongate, x, y, z))
    }

    /// Mirror the shape across the selected axis planes.
    pub fn symmetry(&self, x: bool, y: bool, z: bool) -> Program {
        self.transformed(Cell::new(Op::Symmetry, flag(x), flag(y), flag(z)))
    }

    /// Uniform scale by `k`. The closing cell rescales the evaluated
    /// distance back to outer units, so the result stays a true distance
    /// field.
    pub fn scale(&self, k: f32) -> Program {
        self.wrapped(Cell::new(Op::Scale, k, 0.0, 0.0), Op::PopScale)
    }

    /// Turn the filled body into a shell of the given thickness.
    pub fn onion(&self, thickness: f32) -> Program {
        self.wrapped(Cell::new(Op::Onion, thickness, 0.0, 0.0), Op::PopOnion)
    }

    /// Round corners by shrinking the distance field by `k`.
    pub fn smooth(&self, k: f32) -> Program {
        let mut out = self.clone();
        out.push(Cell::new(Op::Smooth, k, 0.0, 0.0));
        out
    }

    /// Tag the shape with a material id from the palette.
    pub fn set_material(&self, id: u8) -> Program {
        self.wrapped(
            Cell::new(Op::PushMaterial, f32::from(id), 0.0, 0.0),
            Op::PopMaterial,
        )
    }

    fn transformed(&self, cell: Cell) -> Program {
        self.wrapped(cell, Op::PopTransform)
    }

    fn wrapped(&self, head: Cell, tail: Op) -> Program {
        let mut out = Program::default();
        out.push(head);
        out.append(self);
        out.push(Cell::new(tail, 0.0, 0.0, 0.0));
        out
    }
}

fn flag(on: bool) -> f32 {
    if on { 1.0 } else { 0.0 }
}
