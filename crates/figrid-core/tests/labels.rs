// File: crates/figrid-core/tests/labels.rs
// Purpose: Validate label placement on tiny regions and label-spec parsing.

use figrid_core::{
    add_label, add_labels, Figure, FigureConfig, FontWeight, HAlign, LabelSpec, LayoutError, TextStyle, VAlign,
};

#[test]
fn single_label_has_text_and_no_decorations() {
    let mut fig = Figure::with_config(FigureConfig::square(10.0));
    let id = add_label(&mut fig, "A", 0.0, 0.05, TextStyle::new().fontsize(20.0)).expect("label");

    assert!(fig.texts().any(|t| t == "A"));
    let ax = fig.axes(id).expect("backing region");
    assert!(!ax.axis_on);
    assert!(!ax.frame_visible());
    assert!(!ax.x_ticklabels_visible() && !ax.y_ticklabels_visible());
    assert_eq!(ax.texts.len(), 1);
    assert_eq!((ax.texts[0].x, ax.texts[0].y), (0.0, 0.0));
    assert_eq!(ax.texts[0].style.fontsize, 20.0);
}

#[test]
fn label_region_is_one_cell_wide() {
    let mut fig = Figure::new();
    let id = add_label(&mut fig, "Test Label", 0.5, 0.5, TextStyle::new()).expect("label");
    let b = fig.axes(id).expect("axes").position;
    assert!(b.width() > 0.0 && b.width() < 0.02);
    assert!(b.height() > 0.0 && b.height() < 0.02);
}

#[test]
fn multiple_labels_are_added_in_order() {
    let mut fig = Figure::new();
    let mut a = LabelSpec::new("A", 0.1, 0.1);
    a.fontsize = Some(12.0);
    let b = LabelSpec::new("B", 0.9, 0.1);
    let ids = add_labels(&mut fig, &[a, b]).expect("labels");
    assert_eq!(ids.len(), 2);
    let texts: Vec<&str> = fig.texts().collect();
    assert_eq!(texts, vec!["A", "B"]);
}

#[test]
fn label_specs_parse_from_toml() {
    let src = r##"
        [[labels]]
        label_text = "A"
        xpos = 0.0
        ypos = 0.05
        fontsize = 20
        weight = "bold"
        ha = "right"
        va = "bottom"

        [[labels]]
        label_text = "B"
        xpos = 0.37
        ypos = 0.05
        color = "#336699"
    "##;
    #[derive(serde::Deserialize)]
    struct Doc {
        labels: Vec<LabelSpec>,
    }
    let doc: Doc = toml::from_str(src).expect("parse labels");
    let style = doc.labels[0].style();
    assert_eq!(style.fontsize, 20.0);
    assert_eq!(style.weight, FontWeight::Bold);
    assert_eq!(style.ha, HAlign::Right);
    assert_eq!(style.va, VAlign::Bottom);

    let mut fig = Figure::new();
    add_labels(&mut fig, &doc.labels).expect("labels");
    assert_eq!(fig.len(), 2);
}

#[test]
fn unknown_label_key_is_rejected() {
    let json = r#"{"label_text": "A", "xpos": 0.1, "ypos": 0.1, "rotation": 45}"#;
    let err = serde_json::from_str::<LabelSpec>(json).unwrap_err();
    assert!(err.to_string().contains("rotation"), "{err}");
}

#[test]
fn unknown_keyword_option_is_rejected() {
    let err = TextStyle::new().with_options([("fontsize", "20"), ("family", "serif")]).unwrap_err();
    assert_eq!(err, LayoutError::UnknownTextOption("family".into()));
}

#[test]
fn labels_at_six_percent_get_one_cell_regions() {
    let mut fig = Figure::with_config(FigureConfig::square(10.0));
    let x = add_label(&mut fig, "x", 0.06, 0.5, TextStyle::new()).expect("label at xpos 0.06");
    let y = add_label(&mut fig, "y", 0.5, 0.06, TextStyle::new()).expect("label at ypos 0.06");
    let corner = add_label(&mut fig, "c", 0.06, 0.06, TextStyle::new()).expect("label at 0.06, 0.06");

    let bx = fig.axes(x).expect("axes").position;
    let by = fig.axes(y).expect("axes").position;
    let bc = fig.axes(corner).expect("axes").position;
    assert!(bx.width() > 0.0 && bx.width() < 0.02);
    assert!(by.height() > 0.0 && by.height() < 0.02);
    assert!((bc.x0 - bx.x0).abs() < 1e-12, "same column as the x label");
    assert!((bc.y1 - by.y1).abs() < 1e-12, "same row as the y label");
}

#[test]
fn label_region_matches_floored_cell() {
    use figrid_core::{place_axes_on_grid, GridPlacement};

    let mut fig = Figure::new();
    let id = add_label(&mut fig, "D", 0.45, 0.55, TextStyle::new()).expect("label");
    let cell = place_axes_on_grid(&mut fig, &GridPlacement::new().xspan(0.455, 0.465).yspan(0.555, 0.565))
        .expect("cell 45, 55")
        .first();
    assert_eq!(fig.axes(id).expect("label").position, fig.axes(cell).expect("cell").position);
}
