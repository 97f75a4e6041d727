//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{render_chord_to_svg, render_frame_to_svg, DiagramRequest, Theme};

fn size(width: jfloat, height: jfloat) -> Option<(f64, f64)> {
    if width > 0.0 && height > 0.0 {
        Some((width as f64, height as f64))
    } else {
        None
    }
}

fn to_jstring(env: &mut JNIEnv, svg: Result<String, crate::DiagramError>) -> jstring {
    match svg {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::error!("render failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render a JSON diagram request to SVG.
///
/// Called from Kotlin as:
///   external fun renderJson(json: String, width: Float, height: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
    width: jfloat,
    height: jfloat,
) -> jstring {
    let json: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let svg = DiagramRequest::from_json(&json).and_then(|request| {
        let size = size(width, height).or(request.size());
        render_chord_to_svg(&request.chord, &request.instrument, &request.theme, size)
    });
    to_jstring(&mut env, svg)
}

/// Render the first MusicXML `<frame>` in `xml` to SVG with the default theme.
///
/// Called from Kotlin as:
///   external fun renderFrame(xml: String, width: Float, height: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_renderFrame(
    mut env: JNIEnv,
    _class: JClass,
    xml: JString,
    width: jfloat,
    height: jfloat,
) -> jstring {
    let xml: String = match env.get_string(&xml) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let svg = render_frame_to_svg(&xml, &Theme::default(), size(width, height));
    to_jstring(&mut env, svg)
}
