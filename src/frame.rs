//! MusicXML frame import — reads `<frame>` chord diagrams into the chord model.
//!
//! MusicXML numbers strings from 1 = highest pitch, which is the rightmost
//! column of a diagram. Barres are a pair of frame notes marked
//! `<barre type="start"/>` and `<barre type="stop"/>` at the same fret;
//! several barres may be open at once.

use std::str::FromStr;

use roxmltree::{Document, Node};

use crate::error::DiagramError;
use crate::model::*;

/// Parse every `<frame>` element in a MusicXML document (or fragment).
pub fn parse_frames(xml: &str) -> Result<Vec<(Instrument, Chord)>, DiagramError> {
    // MusicXML files include a DOCTYPE declaration, so we must allow DTDs
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    doc.descendants()
        .filter(|n| n.has_tag_name("frame"))
        .map(|frame| parse_frame_node(&frame))
        .collect()
}

/// Parse the first `<frame>` element of a document.
pub fn parse_frame(xml: &str) -> Result<(Instrument, Chord), DiagramError> {
    parse_frames(xml)?
        .into_iter()
        .next()
        .ok_or(DiagramError::MissingElement("frame"))
}

// ─── Frame ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarreMark {
    Start,
    Stop,
}

#[derive(Debug)]
struct FrameNote {
    /// MusicXML string number, 1 = highest pitch
    string: usize,
    fret: u32,
    finger: Option<Finger>,
    barre: Option<BarreMark>,
}

fn parse_frame_node(node: &Node) -> Result<(Instrument, Chord), DiagramError> {
    let mut strings: Option<usize> = None;
    let mut frets: Option<u32> = None;
    let mut first_fret: u32 = 1;
    let mut notes = Vec::new();

    for child in node.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "frame-strings" => strings = Some(parse_number(&child, "frame-strings")?),
            "frame-frets" => frets = Some(parse_number(&child, "frame-frets")?),
            "first-fret" => first_fret = parse_number(&child, "first-fret")?,
            "frame-note" => notes.push(parse_frame_note(&child)?),
            _ => {}
        }
    }

    let strings = strings.ok_or(DiagramError::MissingElement("frame-strings"))?;
    let frets = frets.ok_or(DiagramError::MissingElement("frame-frets"))?;
    let instrument = Instrument::new(frets, strings)?;

    let mut chord = Chord::new().starting_at(first_fret);
    chord.name = node
        .parent_element()
        .filter(|p| p.has_tag_name("harmony"))
        .and_then(|harmony| harmony_name(&harmony));
    chord.components = components_from_notes(&notes, strings)?;
    chord.validate(&instrument)?;

    log::debug!(
        "frame {:?}: {} components, first fret {}",
        chord.name,
        chord.components.len(),
        chord.initial_fret
    );
    Ok((instrument, chord))
}

fn parse_frame_note(node: &Node) -> Result<FrameNote, DiagramError> {
    let mut string = None;
    let mut fret = None;
    let mut finger = None;
    let mut barre = None;

    for child in node.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "string" => string = Some(parse_number(&child, "string")?),
            "fret" => fret = Some(parse_number(&child, "fret")?),
            "fingering" => finger = child.text().and_then(Finger::from_label),
            "barre" => {
                barre = match child.attribute("type") {
                    Some("start") => Some(BarreMark::Start),
                    Some("stop") => Some(BarreMark::Stop),
                    other => {
                        return Err(DiagramError::InvalidValue {
                            element: "barre",
                            value: other.unwrap_or("").to_string(),
                        })
                    }
                }
            }
            _ => {}
        }
    }

    Ok(FrameNote {
        string: string.ok_or(DiagramError::MissingElement("string"))?,
        fret: fret.ok_or(DiagramError::MissingElement("fret"))?,
        finger,
        barre,
    })
}

/// Diagram column of a MusicXML string number.
fn column(string: usize, strings: usize) -> Result<usize, DiagramError> {
    if string == 0 || string > strings {
        return Err(DiagramError::StringOutOfRange { string, strings });
    }
    Ok(strings - string)
}

fn components_from_notes(
    notes: &[FrameNote],
    strings: usize,
) -> Result<Vec<Component>, DiagramError> {
    // A barre start reserves the slot where it appears; the matching stop
    // (same fret) fills it in.
    let mut slots: Vec<Option<Component>> = Vec::with_capacity(notes.len());
    // (slot, fret, column, finger) of barres waiting for their stop note
    let mut open_barres: Vec<(usize, u32, usize, Option<Finger>)> = Vec::new();

    for note in notes {
        let col = column(note.string, strings)?;
        match note.barre {
            Some(BarreMark::Start) => {
                open_barres.push((slots.len(), note.fret, col, note.finger));
                slots.push(None);
            }
            Some(BarreMark::Stop) => {
                match open_barres.iter().rposition(|&(_, fret, _, _)| fret == note.fret) {
                    Some(i) => {
                        let (slot, fret, start, finger) = open_barres.remove(i);
                        let span = StringSpan::new(start.min(col), start.max(col))?;
                        slots[slot] = Some(Barre { fret, strings: span, finger }.into());
                    }
                    None => {
                        log::warn!(
                            "barre stop on string {} at fret {} without a start",
                            note.string,
                            note.fret
                        );
                        slots.push(Some(fretted(note, col)));
                    }
                }
            }
            None => slots.push(Some(fretted(note, col))),
        }
    }

    for (slot, fret, col, finger) in open_barres {
        log::warn!("unterminated barre at fret {fret}; drawing it as a single position");
        slots[slot] = Some(Position { fret, string: col, finger }.into());
    }

    Ok(slots.into_iter().flatten().collect())
}

fn fretted(note: &FrameNote, col: usize) -> Component {
    if note.fret == 0 {
        OpenString::new(col).into()
    } else {
        Position {
            fret: note.fret,
            string: col,
            finger: note.finger,
        }
        .into()
    }
}

// ─── Harmony ─────────────────────────────────────────────────────────

/// Chord symbol of the enclosing `<harmony>`: root, alteration, kind text.
fn harmony_name(node: &Node) -> Option<String> {
    let mut step = None;
    let mut alter = 0;
    let mut kind = String::new();

    for child in node.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "root" => {
                for rc in child.children().filter(|n| n.is_element()) {
                    match rc.tag_name().name() {
                        "root-step" => step = rc.text().map(|t| t.trim().to_string()),
                        "root-alter" => alter = parse_alter(&rc),
                        _ => {}
                    }
                }
            }
            "kind" => kind = child.attribute("text").unwrap_or("").to_string(),
            _ => {}
        }
    }

    let accidental = match alter {
        a if a > 0 => "#",
        a if a < 0 => "b",
        _ => "",
    };
    step.map(|s| format!("{s}{accidental}{kind}"))
}

// ─── Helpers ─────────────────────────────────────────────────────────

fn parse_number<T: FromStr>(node: &Node, element: &'static str) -> Result<T, DiagramError> {
    let text = node.text().unwrap_or("").trim();
    text.parse().map_err(|_| DiagramError::InvalidValue {
        element,
        value: text.to_string(),
    })
}

fn parse_alter(node: &Node) -> i32 {
    node.text()
        .and_then(|t| t.trim().parse::<f64>().ok())
        .map(|a| a.round() as i32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_numbers_map_right_to_left() {
        assert_eq!(column(1, 6).unwrap(), 5);
        assert_eq!(column(6, 6).unwrap(), 0);
        assert!(matches!(
            column(7, 6),
            Err(DiagramError::StringOutOfRange { string: 7, strings: 6 })
        ));
        assert!(column(0, 6).is_err());
    }

    #[test]
    fn open_and_fretted_notes() {
        let xml = r#"<frame>
            <frame-strings>4</frame-strings>
            <frame-frets>4</frame-frets>
            <frame-note><string>4</string><fret>2</fret><fingering>2</fingering></frame-note>
            <frame-note><string>3</string><fret>0</fret></frame-note>
        </frame>"#;
        let (instrument, chord) = parse_frame(xml).unwrap();
        assert_eq!(instrument, Instrument::ukulele());
        assert_eq!(chord.initial_fret, 1);
        assert_eq!(chord.name, None);
        assert_eq!(
            chord.components,
            vec![
                Component::from(Position::new(2, 0).with_finger(Finger::Middle)),
                OpenString::new(1).into(),
            ]
        );
    }

    #[test]
    fn missing_frame_strings_is_an_error() {
        let xml = "<frame><frame-frets>4</frame-frets></frame>";
        assert!(matches!(
            parse_frame(xml),
            Err(DiagramError::MissingElement("frame-strings"))
        ));
    }

    #[test]
    fn non_numeric_fret_is_an_error() {
        let xml = r#"<frame><frame-strings>6</frame-strings><frame-frets>5</frame-frets>
            <frame-note><string>1</string><fret>x</fret></frame-note></frame>"#;
        assert!(matches!(
            parse_frame(xml),
            Err(DiagramError::InvalidValue { element: "fret", .. })
        ));
    }

    #[test]
    fn document_without_frames() {
        assert!(parse_frames("<harmony/>").unwrap().is_empty());
        assert!(matches!(
            parse_frame("<harmony/>"),
            Err(DiagramError::MissingElement("frame"))
        ));
    }
}
