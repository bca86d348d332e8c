use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::form::{Control, ControlKind, FormSnapshot};

/// One parameter the server is expected to receive.
///
/// The guard's count and the diagnostic inspector both come from the same
/// enumeration, so the two can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamEntry {
    pub kind: String,
    pub name: String,
    pub value: String,
}

/// Enumerate the parameters this submission will carry, in control order.
///
/// Rules, applied to enabled controls only:
/// - text-like inputs, textareas and submit buttons post one parameter each;
/// - a checkbox posts only when checked;
/// - a radio group posts one parameter per distinct name, however many buttons
///   share it;
/// - a single-select list always posts exactly one value;
/// - a multi-select list posts one parameter per selected option;
/// - file inputs, reset inputs and non-submit buttons post nothing.
///
/// The estimate must never fall below what the server will see for these
/// kinds; counting an unchecked radio group is an accepted overcount.
pub fn submitted_params(form: &FormSnapshot) -> Vec<ParamEntry> {
    let mut out = Vec::new();
    let mut radio_groups: HashSet<&str> = HashSet::new();

    for control in &form.controls {
        if control.disabled {
            continue;
        }
        match &control.kind {
            ControlKind::Text { value }
            | ControlKind::Textarea { value }
            | ControlKind::Submit { value } => out.push(entry(control, value.clone())),
            ControlKind::Checkbox { checked, value } => {
                if *checked {
                    out.push(entry(control, value.clone()));
                }
            }
            ControlKind::Radio { .. } => {
                // One parameter per group, recorded at the group's first
                // enabled occurrence.
                if radio_groups.insert(control.name.as_str()) {
                    out.push(entry(control, checked_radio_value(form, &control.name)));
                }
            }
            ControlKind::Select {
                multiple: false,
                options,
            } => {
                let value = options
                    .iter()
                    .find(|o| o.selected)
                    .or_else(|| options.first())
                    .map(|o| o.value.clone())
                    .unwrap_or_default();
                out.push(entry(control, value));
            }
            ControlKind::Select {
                multiple: true,
                options,
            } => {
                for option in options.iter().filter(|o| o.selected) {
                    out.push(entry(control, option.value.clone()));
                }
            }
            ControlKind::Button | ControlKind::File | ControlKind::Reset => {}
        }
    }

    out
}

/// Estimated number of parameters the form will POST.
pub fn estimate(form: &FormSnapshot) -> usize {
    submitted_params(form).len()
}

fn checked_radio_value(form: &FormSnapshot, group: &str) -> String {
    form.controls
        .iter()
        .filter(|c| !c.disabled && c.name == group)
        .find_map(|c| match &c.kind {
            ControlKind::Radio {
                checked: true,
                value,
            } => Some(value.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn entry(control: &Control, value: String) -> ParamEntry {
    ParamEntry {
        kind: control.kind_label().to_string(),
        name: control.name.clone(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::SelectOption;

    fn control(name: &str, kind: ControlKind) -> Control {
        Control {
            name: name.to_string(),
            disabled: false,
            kind,
        }
    }

    fn disabled(name: &str, kind: ControlKind) -> Control {
        Control {
            name: name.to_string(),
            disabled: true,
            kind,
        }
    }

    fn text(name: &str) -> Control {
        control(
            name,
            ControlKind::Text {
                value: String::new(),
            },
        )
    }

    fn checkbox(name: &str, checked: bool) -> Control {
        control(
            name,
            ControlKind::Checkbox {
                checked,
                value: "on".to_string(),
            },
        )
    }

    fn radio(name: &str, checked: bool, value: &str) -> Control {
        control(
            name,
            ControlKind::Radio {
                checked,
                value: value.to_string(),
            },
        )
    }

    fn select(name: &str, multiple: bool, options: &[(&str, bool)]) -> Control {
        control(
            name,
            ControlKind::Select {
                multiple,
                options: options
                    .iter()
                    .map(|(value, selected)| SelectOption {
                        value: value.to_string(),
                        selected: *selected,
                    })
                    .collect(),
            },
        )
    }

    fn form(controls: Vec<Control>) -> FormSnapshot {
        FormSnapshot { controls }
    }

    #[test]
    fn empty_form_counts_zero() {
        assert_eq!(estimate(&form(vec![])), 0);
    }

    #[test]
    fn text_inputs_plus_submit_button() {
        let form = form(vec![
            text("a"),
            text("b"),
            text("c"),
            control(
                "save",
                ControlKind::Submit {
                    value: "Save".to_string(),
                },
            ),
        ]);
        assert_eq!(estimate(&form), 4);
    }

    #[test]
    fn checkbox_posts_only_when_checked() {
        let form = form(vec![checkbox("a", true), checkbox("b", false)]);
        assert_eq!(estimate(&form), 1);
    }

    #[test]
    fn radio_group_posts_once_with_checkboxes() {
        let form = form(vec![
            radio("colour", false, "red"),
            radio("colour", true, "green"),
            radio("colour", false, "blue"),
            checkbox("active", true),
            checkbox("featured", false),
        ]);
        let entries = submitted_params(&form);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "colour");
        assert_eq!(entries[0].value, "green");
        assert_eq!(entries[1].name, "active");
    }

    #[test]
    fn distinct_radio_groups_post_one_each() {
        let form = form(vec![
            radio("colour", true, "red"),
            radio("colour", false, "green"),
            radio("size", false, "s"),
            radio("size", false, "m"),
        ]);
        assert_eq!(estimate(&form), 2);
    }

    #[test]
    fn single_select_always_posts_one() {
        let form = form(vec![
            select("country", false, &[("uk", false), ("fr", false)]),
            select("empty", false, &[]),
        ]);
        let entries = submitted_params(&form);
        assert_eq!(entries.len(), 2);
        // Falls back to the first option, the browser's implicit selection.
        assert_eq!(entries[0].value, "uk");
    }

    #[test]
    fn multi_select_posts_per_selected_option() {
        let form = form(vec![select(
            "tags",
            true,
            &[("a", true), ("b", false), ("c", true)],
        )]);
        let entries = submitted_params(&form);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "a");
        assert_eq!(entries[1].value, "c");
    }

    #[test]
    fn multi_select_with_nothing_selected_posts_nothing() {
        let form = form(vec![select("tags", true, &[("a", false), ("b", false)])]);
        assert_eq!(estimate(&form), 0);
    }

    #[test]
    fn excluded_kinds_post_nothing() {
        let form = form(vec![
            control("upload", ControlKind::File),
            control("clear", ControlKind::Reset),
            control("more", ControlKind::Button),
        ]);
        assert_eq!(estimate(&form), 0);
    }

    #[test]
    fn disabled_controls_post_nothing() {
        let form = form(vec![
            disabled(
                "a",
                ControlKind::Text {
                    value: "x".to_string(),
                },
            ),
            disabled(
                "b",
                ControlKind::Checkbox {
                    checked: true,
                    value: "on".to_string(),
                },
            ),
            disabled(
                "c",
                ControlKind::Radio {
                    checked: true,
                    value: "r".to_string(),
                },
            ),
            disabled(
                "d",
                ControlKind::Select {
                    multiple: false,
                    options: vec![SelectOption {
                        value: "v".to_string(),
                        selected: true,
                    }],
                },
            ),
        ]);
        assert_eq!(estimate(&form), 0);
    }

    #[test]
    fn disabled_radio_does_not_hide_its_group() {
        let form = form(vec![
            disabled("colour", ControlKind::Radio {
                checked: false,
                value: "red".to_string(),
            }),
            radio("colour", true, "green"),
        ]);
        let entries = submitted_params(&form);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "green");
    }

    #[test]
    fn inspector_rows_match_the_count() {
        let form = form(vec![
            text("title"),
            checkbox("active", true),
            select("tags", true, &[("a", true), ("b", true)]),
        ]);
        assert_eq!(submitted_params(&form).len(), estimate(&form));
        let kinds: Vec<String> = submitted_params(&form)
            .into_iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            ["text", "checkbox", "select-multiple", "select-multiple"]
        );
    }
}
