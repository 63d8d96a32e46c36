// SPDX-License-Identifier: AGPL-3.0-only

pub mod colours;
pub mod stream;

pub use colours::{disable_colours, palette};
pub use stream::{StopReason, TranscodeContext, transcode_files, transcode_stream};
