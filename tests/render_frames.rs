use formshell::app::FormSource;
use formshell::ui::render_to_string;
use formshell::{handle_event, initialize, Action, Config, Event, ThemeId, ViewMode};
use std::fs;

const CONTACT_JSON: &str = r#"{
  "id": "contact",
  "title": "Contact us",
  "submit_label": "Send",
  "sections": [
    {
      "id": "main",
      "title": "Details",
      "fields": [
        { "name": "name", "label": "Name", "type": "text",
          "validation": [{ "type": "required" }] },
        { "name": "age", "label": "Age", "type": "number" },
        { "name": "news", "label": "Newsletter", "type": "checkbox" }
      ]
    }
  ]
}"#;

fn loaded_state(dir: &tempfile::TempDir, view: &str) -> formshell::AppState {
    let path = dir.path().join("contact.json");
    fs::write(&path, CONTACT_JSON).unwrap();

    let config = Config {
        view: view.parse().unwrap(),
        form_file: Some(path.to_string_lossy().into_owned()),
        ..Default::default()
    };
    let mut state = initialize(&config);

    let (_, actions) = handle_event(&mut state, &Event::ReloadForm).unwrap();
    let [Action::LoadForm { path }] = actions.as_slice() else {
        panic!("expected a load action");
    };
    let form = FormSource::new(path.clone()).load().unwrap();
    handle_event(&mut state, &Event::ConfigChanged(form)).unwrap();
    state
}

#[test]
fn builder_frame_shows_outline() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_state(&dir, "builder");

    let frame = render_to_string(&state, 24, 100);

    assert!(frame.contains("Form Shell · Contact us"));
    assert!(frame.contains("Details"));
    assert!(frame.contains("Newsletter"));
}

#[test]
fn preview_frame_shows_banner_after_submit() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = loaded_state(&dir, "preview");
    assert_eq!(state.shell.view(), ViewMode::Preview);

    for c in "Ada".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::NextField).unwrap();
    handle_event(&mut state, &Event::Char('4')).unwrap();
    handle_event(&mut state, &Event::Char('2')).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();

    let message = state.shell.submission_message().to_string();
    assert!(message.contains("\"age\": 42"));
    assert!(message.contains("\"news\": false"));

    let frame = render_to_string(&state, 24, 100);
    assert!(frame.contains("Form submitted successfully! Data: {"));
    assert!(frame.contains("\"name\": \"Ada\""));

    let [Action::ScheduleClearance(ticket)] = actions.as_slice() else {
        panic!("expected a clearance");
    };
    handle_event(&mut state, &Event::SubmissionExpired(*ticket)).unwrap();
    let frame = render_to_string(&state, 24, 100);
    assert!(!frame.contains("Form submitted successfully!"));
}

#[test]
fn theme_switch_changes_palette() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = loaded_state(&dir, "builder");

    let modern = render_to_string(&state, 24, 80);
    handle_event(&mut state, &Event::SwitchTheme(ThemeId::Classic)).unwrap();
    let classic = render_to_string(&state, 24, 80);

    assert_eq!(state.theme().name, "classic");
    assert_ne!(modern, classic);
}

#[test]
fn broken_definition_is_reported_in_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let mut state = initialize(&Config::default());
    let error = FormSource::new(&path).load().unwrap_err().to_string();
    handle_event(&mut state, &Event::FormLoadFailed { error: error.clone() }).unwrap();

    let frame = render_to_string(&state, 24, 200);
    assert!(frame.contains("No form loaded"));
    assert!(state.load_error.as_deref() == Some(error.as_str()));
}

#[test]
fn large_submission_banner_is_clipped_not_dropped() {
    use formshell::domain::{FieldType, FormConfig, FormField, FormSection};

    let config = FormConfig {
        title: "Long survey".to_string(),
        sections: vec![FormSection {
            id: "questions".to_string(),
            title: "Questions".to_string(),
            description: None,
            fields: (0..15)
                .map(|i| FormField::new(format!("q{i}"), format!("Question {i}"), FieldType::Text))
                .collect(),
        }],
        ..Default::default()
    };

    let mut state = initialize(&Config {
        view: ViewMode::Preview,
        ..Default::default()
    });
    handle_event(&mut state, &Event::ConfigChanged(config)).unwrap();
    handle_event(&mut state, &Event::Char('y')).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
    assert_eq!(actions.len(), 1);

    let frame = render_to_string(&state, 24, 100);
    assert!(frame.contains("Form submitted successfully! Data: {"));
    assert!(frame.contains("\"q0\": \"y\""));
    assert!(frame.contains("… (4 more lines)"));
    assert!(frame.contains("Long survey"));
}
