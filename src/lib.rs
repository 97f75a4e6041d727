//! chordlib — chord fingering diagram rendering for fretted instruments.
//!
//! Draws a fret grid, position markers, barres and the open/closed string
//! indicators above the nut onto any [`Surface`], with an SVG backend built in.
//!
//! # Example
//! ```
//! use chordlib::{
//!     render_chord_to_svg, Barre, Chord, Finger, Instrument, Position, StringSpan, Theme,
//! };
//!
//! let bm = Chord::named("Bm")
//!     .starting_at(7)
//!     .with(Barre::new(7, StringSpan::new(0, 5).unwrap()).with_finger(Finger::Index))
//!     .with(Position::new(9, 2).with_finger(Finger::Pinky))
//!     .with(Position::new(9, 1).with_finger(Finger::Ring));
//!
//! let svg = render_chord_to_svg(&bm, &Instrument::guitar(), &Theme::default(), None).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod error;
pub mod frame;
pub mod model;
pub mod renderer;
pub mod theme;

#[cfg(target_os = "android")]
pub mod android;

use serde::{Deserialize, Serialize};

pub use error::DiagramError;
pub use frame::{parse_frame, parse_frames};
pub use model::*;
pub use renderer::{
    record_chord, render_chord_to_svg, render_diagram, Anchor, DrawCall, Geometry, GridSession,
    Point, RecordingSurface, Rect, StringIndicator, StringUsage, Surface, SvgBuilder,
};
pub use theme::{Colors, Sizes, TextStyle, Theme, Typography};

/// Everything needed to render one diagram, as exchanged over FFI.
///
/// Every field is optional in JSON; omitted ones take their defaults
/// (guitar, default theme, empty chord, 300×360). Width and height default
/// independently of each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramRequest {
    pub instrument: Instrument,
    pub theme: Theme,
    pub chord: Chord,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl DiagramRequest {
    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Canvas size; a missing dimension takes its default.
    pub(crate) fn size(&self) -> Option<(f64, f64)> {
        match (self.width, self.height) {
            (None, None) => None,
            (w, h) => Some((
                w.unwrap_or(renderer::DEFAULT_WIDTH),
                h.unwrap_or(renderer::DEFAULT_HEIGHT),
            )),
        }
    }
}

/// Render a JSON [`DiagramRequest`] to SVG.
pub fn render_json_to_svg(json: &str) -> Result<String, DiagramError> {
    let request = DiagramRequest::from_json(json)?;
    render_chord_to_svg(&request.chord, &request.instrument, &request.theme, request.size())
}

/// Render a JSON [`DiagramRequest`] into a list of draw calls, for hosts
/// that paint with their own canvas.
pub fn render_json_to_calls(json: &str) -> Result<Vec<DrawCall>, DiagramError> {
    let request = DiagramRequest::from_json(json)?;
    record_chord(&request.chord, &request.instrument, &request.theme, request.size())
}

/// Parse the first MusicXML `<frame>` in `xml` and render it to SVG.
pub fn render_frame_to_svg(
    xml: &str,
    theme: &Theme,
    size: Option<(f64, f64)>,
) -> Result<String, DiagramError> {
    let (instrument, chord) = parse_frame(xml)?;
    render_chord_to_svg(&chord, &instrument, theme, size)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

fn into_c_string(result: Result<String, DiagramError>) -> *mut c_char {
    match result {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            log::error!("render failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render a JSON diagram request and return SVG as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// `width`/`height` override the request's size when both are positive.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_json(
    json: *const c_char,
    width: f64,
    height: f64,
) -> *mut c_char {
    if json.is_null() {
        return std::ptr::null_mut();
    }
    let json = match unsafe { CStr::from_ptr(json) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let result = DiagramRequest::from_json(json).and_then(|mut request| {
        if width > 0.0 && height > 0.0 {
            request.width = Some(width);
            request.height = Some(height);
        }
        render_chord_to_svg(&request.chord, &request.instrument, &request.theme, request.size())
    });
    into_c_string(result)
}

/// Render the first `<frame>` of a MusicXML string with the default theme.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// Pass 0.0 for `width`/`height` to use the default size.
///
/// # Safety
/// `xml` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_frame(
    xml: *const c_char,
    width: f64,
    height: f64,
) -> *mut c_char {
    if xml.is_null() {
        return std::ptr::null_mut();
    }
    let xml = match unsafe { CStr::from_ptr(xml) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let size = if width > 0.0 && height > 0.0 { Some((width, height)) } else { None };
    into_c_string(render_frame_to_svg(xml, &Theme::default(), size))
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
