// guard-core/src/domain/checkpoint/mod.rs

pub mod action;
pub mod assembler;
pub mod notification;
pub mod result_format;

pub use action::{ActionKind, CheckpointAction};
pub use assembler::{CheckpointDefinition, assemble, compose_actions};
pub use notification::{Channel, EmailTarget, NotificationSpec, NotificationTarget, SlackTarget, TeamsTarget};
pub use result_format::{DetailLevel, ResultFormat, ResultFormatDescriptor};
