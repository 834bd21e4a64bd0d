//! Literal vertex tables for every mesh in the room.
//!
//! Each row is `[px, py, pz, nx, ny, nz, u, v]`; every three rows form one
//! triangle in draw order. Nothing here is indexed.

/// Table top slab with four legs.
#[rustfmt::skip]
pub const TABLE: [[f32; 8]; 132] = [
    // table top
    [ 1.00,  0.00,  0.25,  0.00,  1.00,  0.00,  1.00,  0.00],
    [ 1.00,  0.00, -0.25,  0.00,  1.00,  0.00,  0.00,  0.00],
    [-1.00,  0.00, -0.25,  0.00,  1.00,  0.00,  0.00,  1.00],
    [-1.00,  0.00,  0.25,  0.00,  1.00,  0.00,  1.00,  0.00],
    [-1.00,  0.00, -0.25,  0.00,  1.00,  0.00,  0.00,  0.00],
    [ 1.00,  0.00,  0.25,  0.00,  1.00,  0.00,  1.00,  1.00],

    // table top underside
    [ 1.00, -0.10,  0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 1.00, -0.10, -0.25,  0.00, -1.00,  0.00,  0.00,  0.00],
    [-1.00, -0.10, -0.25,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-1.00, -0.10,  0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-1.00, -0.10, -0.25,  0.00, -1.00,  0.00,  0.00,  0.00],
    [ 1.00, -0.10,  0.25,  0.00, -1.00,  0.00,  1.00,  1.00],

    // table top side front
    [ 1.00,  0.00,  0.25,  0.00,  0.00,  1.00,  1.00,  0.00],
    [ 1.00, -0.10,  0.25,  0.00,  0.00,  1.00,  0.00,  1.00],
    [-1.00,  0.00,  0.25,  0.00,  0.00,  1.00,  1.00,  1.00],
    [-1.00,  0.00,  0.25,  0.00,  0.00,  1.00,  0.00,  1.00],
    [-1.00, -0.10,  0.25,  0.00,  0.00,  1.00,  1.00,  0.00],
    [ 1.00, -0.10,  0.25,  0.00,  0.00,  1.00,  0.00,  0.00],

    // table top side back
    [ 1.00,  0.00, -0.25,  0.00,  0.00, -1.00,  1.00,  0.00],
    [ 1.00, -0.10, -0.25,  0.00,  0.00, -1.00,  0.00,  1.00],
    [-1.00,  0.00, -0.25,  0.00,  0.00, -1.00,  1.00,  1.00],
    [-1.00,  0.00, -0.25,  0.00,  0.00, -1.00,  0.00,  1.00],
    [-1.00, -0.10, -0.25,  0.00,  0.00, -1.00,  1.00,  0.00],
    [ 1.00, -0.10, -0.25,  0.00,  0.00, -1.00,  0.00,  0.00],

    // table top side right
    [ 1.00,  0.00,  0.25,  1.00,  0.00,  0.00,  1.00,  0.00],
    [ 1.00,  0.00, -0.25,  1.00,  0.00,  0.00,  0.00,  1.00],
    [ 1.00, -0.10,  0.25,  1.00,  0.00,  0.00,  1.00,  1.00],
    [ 1.00,  0.00, -0.25,  1.00,  0.00,  0.00,  0.00,  1.00],
    [ 1.00, -0.10,  0.25,  1.00,  0.00,  0.00,  1.00,  0.00],
    [ 1.00, -0.10, -0.25,  1.00,  0.00,  0.00,  0.00,  0.00],

    // table top side left
    [-1.00,  0.00,  0.25, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-1.00,  0.00, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-1.00, -0.10,  0.25, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-1.00,  0.00, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-1.00, -0.10,  0.25, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-1.00, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],

    // leg 1 side 1
    [ 1.00, -0.10,  0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 1.00, -0.10,  0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [ 1.00, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 1.00, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 1.00, -0.90,  0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [ 1.00, -0.10,  0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 1 side 2
    [ 0.95, -0.10,  0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 0.95, -0.10,  0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [ 0.95, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 0.95, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 0.95, -0.90,  0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [ 0.95, -0.10,  0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 1 side 3
    [ 1.00, -0.10,  0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 0.95, -0.10,  0.25, -1.00,  0.00,  0.00,  1.00,  1.00],
    [ 1.00, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 1.00, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 0.95, -0.90,  0.25, -1.00,  0.00,  0.00,  1.00,  0.00],
    [ 0.95, -0.10,  0.25, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 1 side 4
    [ 1.00, -0.10,  0.20, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 0.95, -0.10,  0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [ 1.00, -0.90,  0.20, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 1.00, -0.90,  0.20, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 0.95, -0.90,  0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [ 0.95, -0.10,  0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 2 side 1
    [-1.00, -0.10,  0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-1.00, -0.10,  0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-1.00, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-1.00, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-1.00, -0.90,  0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-1.00, -0.10,  0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 2 side 2
    [-0.95, -0.10,  0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-0.95, -0.10,  0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-0.95, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-0.95, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-0.95, -0.90,  0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-0.95, -0.10,  0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 2 side 3
    [-1.00, -0.10,  0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-0.95, -0.10,  0.25, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-1.00, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-1.00, -0.90,  0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-0.95, -0.90,  0.25, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-0.95, -0.10,  0.25, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 2 side 4
    [-1.00, -0.10,  0.20, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-0.95, -0.10,  0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-1.00, -0.90,  0.20, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-1.00, -0.90,  0.20, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-0.95, -0.90,  0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-0.95, -0.10,  0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 3 side 1
    [-1.00, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-1.00, -0.10, -0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-1.00, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-1.00, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-1.00, -0.90, -0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-1.00, -0.10, -0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 3 side 2
    [-0.95, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-0.95, -0.10, -0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-0.95, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-0.95, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-0.95, -0.90, -0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-0.95, -0.10, -0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 3 side 3
    [-1.00, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-0.95, -0.10, -0.25, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-1.00, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-1.00, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-0.95, -0.90, -0.25, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-0.95, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 3 side 4
    [-1.00, -0.10, -0.20, -1.00,  0.00,  0.00,  0.00,  1.00],
    [-0.95, -0.10, -0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [-1.00, -0.90, -0.20, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-1.00, -0.90, -0.20, -1.00,  0.00,  0.00,  0.00,  0.00],
    [-0.95, -0.90, -0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [-0.95, -0.10, -0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 4 side 1
    [ 1.00, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 1.00, -0.10, -0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [ 1.00, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 1.00, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 1.00, -0.90, -0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [ 1.00, -0.10, -0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 4 side 2
    [ 0.95, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 0.95, -0.10, -0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [ 0.95, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 0.95, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 0.95, -0.90, -0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [ 0.95, -0.10, -0.20, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 4 side 3
    [ 1.00, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 1.00, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 0.95, -0.10, -0.25, -1.00,  0.00,  0.00,  1.00,  1.00],
    [ 1.00, -0.90, -0.25, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 0.95, -0.90, -0.25, -1.00,  0.00,  0.00,  1.00,  0.00],
    [ 0.95, -0.10, -0.25, -1.00,  0.00,  0.00,  0.00,  1.00],

    // leg 4 side 4
    [ 1.00, -0.10, -0.20, -1.00,  0.00,  0.00,  0.00,  1.00],
    [ 0.95, -0.10, -0.20, -1.00,  0.00,  0.00,  1.00,  1.00],
    [ 1.00, -0.90, -0.20, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 1.00, -0.90, -0.20, -1.00,  0.00,  0.00,  0.00,  0.00],
    [ 0.95, -0.90, -0.20, -1.00,  0.00,  0.00,  1.00,  0.00],
    [ 0.95, -0.10, -0.20, -1.00,  0.00,  0.00,  0.00,  1.00],
];

/// Floor plane under the table.
#[rustfmt::skip]
pub const FLOOR_PLANE: [[f32; 8]; 6] = [
    [-5.00, -0.90, -5.00,  0.00, -1.00,  0.00,  0.00,  0.00],
    [ 5.00, -0.90, -5.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-5.00, -0.90,  5.00,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 5.00, -0.90, -5.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-5.00, -0.90,  5.00,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 5.00, -0.90,  5.00,  0.00, -1.00,  0.00,  1.00,  1.00],
];

/// Carpet quad resting just above the floor.
#[rustfmt::skip]
pub const CARPET: [[f32; 8]; 6] = [
    [-1.50, -0.80, -1.50,  0.00, -1.00,  0.00,  0.00,  0.00],
    [ 1.50, -0.80, -1.50,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-1.50, -0.80,  1.50,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 1.50, -0.80, -1.50,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-1.50, -0.80,  1.50,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 1.50, -0.80,  1.50,  0.00, -1.00,  0.00,  1.00,  1.00],
];

/// Unit window quad drawn at each light position.
#[rustfmt::skip]
pub const WINDOW: [[f32; 8]; 6] = [
    [-1.00,  0.00, -5.00,  0.00, -1.00,  0.00,  0.00,  0.00],
    [ 1.00,  0.00, -5.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-1.00,  1.00, -5.00,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-1.00,  1.00, -5.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 1.00,  1.00, -5.00,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 1.00,  0.00, -5.00,  0.00, -1.00,  0.00,  1.00,  1.00],
];

/// Faceted teacup: base fan, flared walls and handle.
#[rustfmt::skip]
pub const TEACUP: [[f32; 8]; 201] = [
    // base
    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    // back
    [ 0.00,  1.10, -0.25,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // right
    [ 0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // front
    [ 0.00,  1.10,  0.25,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // left
    [-0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // right
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10, -0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10,  0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    // left
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10, -0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10,  0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    // sides 3
    [ 0.10,  1.60, -0.20,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10, -0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.60, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.60,  0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.10,  1.60,  0.20,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10,  0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.10,  1.60, -0.20,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10, -0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.60, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.60,  0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.10,  1.60,  0.20,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10,  0.25,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  0.00,  1.00],

    // back
    [ 0.00,  1.10, -0.25,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.60, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.60, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.60, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.60, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // right
    [ 0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.60,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.20,  1.60, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.60,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.60,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // front
    [ 0.00,  1.10,  0.25,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.60,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.60,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.17,  1.10,  0.17,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.60,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.10,  1.60,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // left
    [-0.25,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.60,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.20,  1.60, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.17,  1.10, -0.17,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.60, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.10,  1.60, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // back
    [ 0.00,  1.10, -0.25,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.10,  1.60, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.60, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // handle
    [-0.05,  1.20,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.20,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.00,  1.20,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.05,  1.20,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.25,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.20,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.05,  1.25,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.25,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.25,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.00,  1.25,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.05,  1.20,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.20,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.20,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.20,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.05,  1.25,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.25,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.25,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.25,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    // handle upright
    [-0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.20,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.22,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.52,  0.37,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.22,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.52,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.52,  0.37,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.22,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.05,  1.22,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.05,  1.52,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.22,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.22,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.22,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.52,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.22,  0.37,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.55,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    // handle
    [-0.05,  1.50,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.50,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.00,  1.50,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.05,  1.50,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.55,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.50,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.05,  1.55,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.55,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.05,  1.55,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.00,  1.55,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.05,  1.50,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.50,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.50,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.50,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.05,  1.55,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.55,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],

    [-0.05,  1.55,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.00,  1.55,  0.40,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.05,  1.52,  0.40,  0.00, -1.00,  0.00,  1.00,  0.00],
];

/// Saucer under the teacup.
#[rustfmt::skip]
pub const SAUCER: [[f32; 8]; 72] = [
    // base
    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],

    [ 0.00,  1.00,  0.00,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],

    // back
    [ 0.00,  1.10, -0.45,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.27,  1.10, -0.27,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // right
    [ 0.45,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],

    [ 0.27,  1.10,  0.27,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // front
    [ 0.00,  1.10,  0.45,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.27,  1.10,  0.27,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // left
    [-0.45,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],

    [-0.27,  1.10, -0.27,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],

    // back right
    [ 0.00,  1.10, -0.45,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.27,  1.10, -0.27,  0.00, -1.00,  0.00,  1.00,  1.00],

    // right back
    [ 0.27,  1.10, -0.27,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.45,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  1.00,  0.00],

    // right
    [ 0.45,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [ 0.27,  1.10,  0.27,  0.00, -1.00,  0.00,  1.00,  1.00],

    // right front
    [ 0.27,  1.10,  0.27,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  0.00,  1.00],
    [ 0.00,  1.10,  0.45,  0.00, -1.00,  0.00,  1.00,  1.00],

    // front left
    [ 0.00,  1.10,  0.45,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00,  0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.27,  1.10,  0.27,  0.00, -1.00,  0.00,  1.00,  1.00],

    // left front
    [-0.27,  1.10,  0.27,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00,  0.10,  0.00, -1.00,  0.00,  1.00,  0.00],
    [-0.45,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],

    // left back
    [-0.45,  1.10,  0.00,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.20,  1.00, -0.10,  0.00, -1.00,  0.00,  0.00,  1.00],
    [-0.27,  1.10, -0.27,  0.00, -1.00,  0.00,  1.00,  1.00],

    // back left
    [-0.27,  1.10, -0.27,  0.00, -1.00,  0.00,  1.00,  1.00],
    [ 0.00,  1.10, -0.45,  0.00, -1.00,  0.00,  1.00,  1.00],
    [-0.10,  1.00, -0.20,  0.00, -1.00,  0.00,  1.00,  0.00],
];
