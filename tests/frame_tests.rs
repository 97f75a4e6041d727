//! MusicXML frame import tests.

use chordlib::{
    parse_frame, parse_frames, render_frame_to_svg, Barre, Chord, Component, DiagramError,
    Finger, Instrument, OpenString, Position, StringSpan, Theme,
};
use pretty_assertions::assert_eq;

const LEAD_SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 4.0 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">
<score-partwise version="4.0">
  <part id="P1">
    <measure number="1">
      <harmony>
        <root><root-step>B</root-step></root>
        <kind text="m">minor</kind>
        <frame>
          <frame-strings>6</frame-strings>
          <frame-frets>5</frame-frets>
          <first-fret>7</first-fret>
          <frame-note><string>6</string><fret>7</fret><fingering>1</fingering><barre type="start"/></frame-note>
          <frame-note><string>5</string><fret>9</fret><fingering>3</fingering></frame-note>
          <frame-note><string>4</string><fret>9</fret><fingering>4</fingering></frame-note>
          <frame-note><string>1</string><fret>7</fret><barre type="stop"/></frame-note>
        </frame>
      </harmony>
      <harmony>
        <root><root-step>F</root-step><root-alter>1</root-alter></root>
        <kind text="">major</kind>
        <frame>
          <frame-strings>4</frame-strings>
          <frame-frets>4</frame-frets>
          <frame-note><string>4</string><fret>3</fret></frame-note>
          <frame-note><string>3</string><fret>1</fret></frame-note>
          <frame-note><string>2</string><fret>2</fret></frame-note>
          <frame-note><string>1</string><fret>0</fret></frame-note>
        </frame>
      </harmony>
    </measure>
  </part>
</score-partwise>
"#;

#[test]
fn parse_b_minor_barre_chord() {
    let (instrument, chord) = parse_frame(LEAD_SHEET).expect("Failed to parse frame");

    assert_eq!(instrument, Instrument::guitar());
    assert_eq!(
        chord,
        Chord {
            name: Some("Bm".to_string()),
            initial_fret: 7,
            components: vec![
                Component::from(
                    Barre::new(7, StringSpan::new(0, 5).unwrap()).with_finger(Finger::Index)
                ),
                Position::new(9, 1).with_finger(Finger::Ring).into(),
                Position::new(9, 2).with_finger(Finger::Pinky).into(),
            ],
        }
    );
}

#[test]
fn parse_every_frame_in_document() {
    let frames = parse_frames(LEAD_SHEET).unwrap();
    assert_eq!(frames.len(), 2);

    let (instrument, chord) = &frames[1];
    assert_eq!(*instrument, Instrument::ukulele());
    assert_eq!(chord.name.as_deref(), Some("F#"));
    assert_eq!(chord.initial_fret, 1);
    assert_eq!(
        chord.components,
        vec![
            Component::from(Position::new(3, 0)),
            Position::new(1, 1).into(),
            Position::new(2, 2).into(),
            OpenString::new(3).into(),
        ]
    );
}

#[test]
fn render_frame_svg() {
    let svg = render_frame_to_svg(LEAD_SHEET, &Theme::guitar_thumbnail(), Some((220.0, 200.0)))
        .expect("Failed to render frame");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">Bm</text>"));
    assert!(svg.contains(">7</text>"));
    assert!(svg.contains(r#"class="barre""#));
}

#[test]
fn unterminated_barre_becomes_a_position() {
    let xml = r#"<frame>
        <frame-strings>6</frame-strings>
        <frame-frets>5</frame-frets>
        <frame-note><string>5</string><fret>3</fret><fingering>2</fingering><barre type="start"/></frame-note>
        <frame-note><string>3</string><fret>0</fret></frame-note>
    </frame>"#;
    let (_, chord) = parse_frame(xml).unwrap();
    assert_eq!(
        chord.components,
        vec![
            Component::from(Position::new(3, 1).with_finger(Finger::Middle)),
            OpenString::new(3).into(),
        ]
    );
}

#[test]
fn overlapping_barres_pair_by_fret() {
    let xml = r#"<frame>
        <frame-strings>6</frame-strings>
        <frame-frets>5</frame-frets>
        <first-fret>5</first-fret>
        <frame-note><string>6</string><fret>5</fret><fingering>1</fingering><barre type="start"/></frame-note>
        <frame-note><string>4</string><fret>7</fret><fingering>3</fingering><barre type="start"/></frame-note>
        <frame-note><string>2</string><fret>7</fret><barre type="stop"/></frame-note>
        <frame-note><string>1</string><fret>5</fret><barre type="stop"/></frame-note>
    </frame>"#;
    let (_, chord) = parse_frame(xml).unwrap();
    assert_eq!(
        chord.components,
        vec![
            Component::from(
                Barre::new(5, StringSpan::new(0, 5).unwrap()).with_finger(Finger::Index)
            ),
            Barre::new(7, StringSpan::new(2, 4).unwrap())
                .with_finger(Finger::Ring)
                .into(),
        ]
    );
}

#[test]
fn oversized_frame_is_rejected() {
    let xml = r#"<frame>
        <frame-strings>1000000000000</frame-strings>
        <frame-frets>5</frame-frets>
    </frame>"#;
    assert!(matches!(
        parse_frame(xml),
        Err(DiagramError::InvalidLayout { .. })
    ));
}

#[test]
fn frame_string_beyond_instrument_is_rejected() {
    let xml = r#"<frame>
        <frame-strings>4</frame-strings>
        <frame-frets>4</frame-frets>
        <frame-note><string>5</string><fret>2</fret></frame-note>
    </frame>"#;
    assert!(matches!(
        parse_frame(xml),
        Err(DiagramError::StringOutOfRange { string: 5, strings: 4 })
    ));
}

#[test]
fn malformed_xml_is_rejected() {
    assert!(matches!(parse_frame("<frame>"), Err(DiagramError::Xml(_))));
}
