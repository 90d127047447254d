//! Instruction cell opcodes.

/// Opcode stored in the first slot of a program cell.
///
/// The numeric values are part of the instruction-stream format shared with
/// GPU consumers of the same buffer, so they are stable: shapes occupy
/// `1..=4`, combinators `30..=34`, transforms and modifiers `100..=111`,
/// material scopes `200..=201`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Op {
    // === Shapes ===
    /// Sphere: radius.
    Sphere = 1,
    /// Axis-aligned box: half-extents.
    Box3 = 2,
    /// Cylinder extruded along Z: radius, half-height.
    Cylinder = 3,
    /// 2D disc sector extruded along Z: aperture half-angle, radius,
    /// half-depth.
    Wedge = 4,

    // === Combinators ===
    Union = 30,
    SmoothUnion = 31,
    Subtract = 32,
    Intersect = 33,
    SmoothSubtract = 34,

    // === Transforms and modifiers ===
    /// Closes any of the position-only transforms below.
    PopTransform = 100,
    PopScale = 101,
    Translate = 102,
    RotateXY = 103,
    RotateXZ = 104,
    RotateYZ = 105,
    Elongate = 106,
    Smooth = 107,
    Scale = 108,
    Symmetry = 109,
    Onion = 110,
    PopOnion = 111,

    // === Materials ===
    PushMaterial = 200,
    PopMaterial = 201,
}

impl Op {
    /// Decode an opcode from the raw first slot of a cell.
    pub fn from_raw(raw: f32) -> Option<Self> {
        match raw as u32 {
            1 => Some(Self::Sphere),
            2 => Some(Self::Box3),
            3 => Some(Self::Cylinder),
            4 => Some(Self::Wedge),
            30 => Some(Self::Union),
            31 => Some(Self::SmoothUnion),
            32 => Some(Self::Subtract),
            33 => Some(Self::Intersect),
            34 => Some(Self::SmoothSubtract),
            100 => Some(Self::PopTransform),
            101 => Some(Self::PopScale),
            102 => Some(Self::Translate),
            103 => Some(Self::RotateXY),
            104 => Some(Self::RotateXZ),
            105 => Some(Self::RotateYZ),
            106 => Some(Self::Elongate),
            107 => Some(Self::Smooth),
            108 => Some(Self::Scale),
            109 => Some(Self::Symmetry),
            110 => Some(Self::Onion),
            111 => Some(Self::PopOnion),
            200 => Some(Self::PushMaterial),
            201 => Some(Self::PopMaterial),
            _ => None,
        }
    }

    /// Encode for storage in a cell slot.
    pub fn raw(self) -> f32 {
        self as u32 as f32
    }
}
