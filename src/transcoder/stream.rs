// SPDX-License-Identifier: AGPL-3.0-only

use crate::rovar::expand;
use crate::transcoder::colours::palette;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Why the transcoder stopped consuming an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The underlying stream ran out of bytes.
    EndOfStream,
    /// The terminator byte was read.  It is never emitted.
    Terminator,
}

/// Shared context for a transcoding run to keep function signatures concise.
pub struct TranscodeContext<'a> {
    pub out: &'a mut dyn Write,
    pub err_out: &'a mut dyn Write,
    pub terminator: u8,
}

/// Pump one input source through the expansion rule, one byte at a time.
///
/// The terminator is compared against the raw byte before any case folding,
/// so an uppercase terminator does not match its lowercase form.  Each input
/// byte produces exactly one emission burst; both stop conditions leave no
/// trailing partial output.
pub fn transcode_stream<R: BufRead>(
    reader: R,
    out: &mut dyn Write,
    terminator: u8,
) -> io::Result<StopReason> {
    for byte in reader.bytes() {
        let byte = byte?;
        if byte == terminator {
            return Ok(StopReason::Terminator);
        }
        out.write_all(expand(byte).as_bytes())?;
    }
    Ok(StopReason::EndOfStream)
}

/// Transcode every input source in order, returning the process exit code.
///
/// An empty path list and the literal `-` both mean stdin.  A source that
/// fails to open or stream is reported on stderr and flips the exit code to
/// 1 without aborting the remaining sources.  Reaching the terminator ends
/// the whole run: the sentinel closes the translation session, so later
/// sources are not consumed.
pub fn transcode_files(paths: &[String], ctx: &mut TranscodeContext) -> i32 {
    let mut had_error = false;

    if paths.is_empty() {
        return match handle_stdin(ctx) {
            Ok(_) => 0,
            Err(_) => 1,
        };
    }

    for path in paths {
        let outcome = if path == "-" {
            handle_stdin(ctx)
        } else {
            handle_file(path, ctx)
        };

        match outcome {
            Ok(StopReason::Terminator) => break,
            Ok(StopReason::EndOfStream) => {}
            Err(_) => had_error = true,
        }
    }

    if had_error { 1 } else { 0 }
}

/// Handle transcoding from stdin (used when no file paths are provided).
fn handle_stdin(ctx: &mut TranscodeContext) -> io::Result<StopReason> {
    match transcode_stream(BufReader::new(io::stdin().lock()), ctx.out, ctx.terminator) {
        Ok(reason) => Ok(reason),
        Err(err) => {
            let colours = palette();
            let _ = writeln!(
                ctx.err_out,
                "{}Error reading input{}",
                colours.error, colours.reset
            );
            Err(err)
        }
    }
}

/// Handle transcoding from a single file path, reporting failures on stderr.
fn handle_file(path: &str, ctx: &mut TranscodeContext) -> io::Result<StopReason> {
    let colours = palette();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            let _ = writeln!(
                ctx.err_out,
                "{}Cannot open {}{}{}{}: {err}{}",
                colours.error, colours.file, path, colours.reset, colours.error, colours.reset
            );
            return Err(err);
        }
    };

    match transcode_stream(BufReader::new(file), ctx.out, ctx.terminator) {
        Ok(reason) => Ok(reason),
        Err(err) => {
            let _ = writeln!(
                ctx.err_out,
                "{}Error reading {}{}{}{}: {err}{}",
                colours.error, colours.file, path, colours.reset, colours.error, colours.reset
            );
            Err(err)
        }
    }
}
