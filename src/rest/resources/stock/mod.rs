//! Stock resources.

mod movement;

pub use movement::{
    ArticleMovement, DeviceType, Movement, MovementCreation, MovementMotive, MovementState,
    MovementType,
};
