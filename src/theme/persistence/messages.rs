//! Message types for theme persistence operations.

use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Message)]
pub struct SaveThemeRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct LoadThemeRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct NewThemeRequest;
