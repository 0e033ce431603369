//! Gate that checks a request against the action grammar before dispatch.

use crate::action::{Action, ActionKind, ActionRequest, Coordinate};
use crate::error::ComputerError;

/// Validate a raw request. Pure: never touches the backend.
pub fn validate(request: &ActionRequest) -> Result<Action, ComputerError> {
    let kind: ActionKind = request.action.parse()?;

    match kind {
        ActionKind::MouseMove | ActionKind::LeftClickDrag => {
            let Some(raw) = &request.coordinate else {
                return Err(invalid(format!("coordinate is required for {}", kind)));
            };
            if request.text.is_some() {
                return Err(invalid(format!("text is not accepted for {}", kind)));
            }
            let coordinate = parse_coordinate(raw)?;
            Ok(match kind {
                ActionKind::MouseMove => Action::MouseMove { coordinate },
                _ => Action::LeftClickDrag { coordinate },
            })
        }
        ActionKind::Key | ActionKind::Type => {
            let Some(raw) = &request.text else {
                return Err(invalid(format!("text is required for {}", kind)));
            };
            if request.coordinate.is_some() {
                return Err(invalid(format!("coordinate is not accepted for {}", kind)));
            }
            let text = raw
                .as_str()
                .ok_or_else(|| invalid("text must be a string"))?
                .to_string();
            Ok(match kind {
                ActionKind::Key => Action::Key { text },
                _ => Action::Type { text },
            })
        }
        ActionKind::LeftClick
        | ActionKind::RightClick
        | ActionKind::MiddleClick
        | ActionKind::DoubleClick
        | ActionKind::Screenshot
        | ActionKind::CursorPosition => {
            if request.text.is_some() {
                return Err(invalid(format!("text is not accepted for {}", kind)));
            }
            if request.coordinate.is_some() {
                return Err(invalid(format!("coordinate is not accepted for {}", kind)));
            }
            Ok(match kind {
                ActionKind::LeftClick => Action::LeftClick,
                ActionKind::RightClick => Action::RightClick,
                ActionKind::MiddleClick => Action::MiddleClick,
                ActionKind::DoubleClick => Action::DoubleClick,
                ActionKind::Screenshot => Action::Screenshot,
                _ => Action::CursorPosition,
            })
        }
    }
}

fn parse_coordinate(raw: &serde_json::Value) -> Result<Coordinate, ComputerError> {
    let items = match raw.as_array() {
        Some(items) if items.len() == 2 => items,
        _ => return Err(invalid("coordinate must be a list of length 2")),
    };

    let mut values = [0u32; 2];
    for (slot, item) in values.iter_mut().zip(items) {
        *slot = item
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| invalid("coordinate must be a list of non-negative integers"))?;
    }

    Ok(Coordinate::new(values[0], values[1]))
}

fn invalid(message: impl Into<String>) -> ComputerError {
    ComputerError::InvalidArgument(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> ActionRequest {
        ActionRequest::from_value(value).unwrap()
    }

    fn assert_invalid_argument(value: serde_json::Value, expected: &str) {
        match validate(&request(value)) {
            Err(ComputerError::InvalidArgument(msg)) => assert_eq!(msg, expected),
            other => panic!("expected InvalidArgument({expected}), got {other:?}"),
        }
    }

    #[test]
    fn test_mouse_move_valid() {
        let action = validate(&request(json!({"action": "mouse_move", "coordinate": [100, 200]})));
        assert_eq!(
            action.unwrap(),
            Action::MouseMove {
                coordinate: Coordinate::new(100, 200)
            }
        );
    }

    #[test]
    fn test_left_click_drag_valid() {
        let action =
            validate(&request(json!({"action": "left_click_drag", "coordinate": [0, 0]}))).unwrap();
        assert_eq!(action.kind(), ActionKind::LeftClickDrag);
    }

    #[test]
    fn test_mouse_move_requires_coordinate() {
        assert_invalid_argument(
            json!({"action": "mouse_move"}),
            "coordinate is required for mouse_move",
        );
    }

    #[test]
    fn test_drag_rejects_text() {
        assert_invalid_argument(
            json!({"action": "left_click_drag", "coordinate": [1, 2], "text": "x"}),
            "text is not accepted for left_click_drag",
        );
    }

    #[test]
    fn test_coordinate_wrong_arity() {
        for coordinate in [json!([1]), json!([1, 2, 3]), json!([]), json!("1,2"), json!({"x": 1})] {
            assert_invalid_argument(
                json!({"action": "mouse_move", "coordinate": coordinate}),
                "coordinate must be a list of length 2",
            );
        }
    }

    #[test]
    fn test_coordinate_must_be_non_negative_integers() {
        for coordinate in [
            json!([-1, 2]),
            json!([1.5, 2]),
            json!(["1", 2]),
            json!([1, null]),
            json!([1, 5_000_000_000u64]),
        ] {
            assert_invalid_argument(
                json!({"action": "mouse_move", "coordinate": coordinate}),
                "coordinate must be a list of non-negative integers",
            );
        }
    }

    #[test]
    fn test_key_and_type_valid() {
        assert_eq!(
            validate(&request(json!({"action": "key", "text": "ctrl+c"}))).unwrap(),
            Action::Key {
                text: "ctrl+c".to_string()
            }
        );
        assert_eq!(
            validate(&request(json!({"action": "type", "text": "hello"}))).unwrap(),
            Action::Type {
                text: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_type_requires_text() {
        assert_invalid_argument(json!({"action": "type"}), "text is required for type");
    }

    #[test]
    fn test_key_rejects_coordinate() {
        assert_invalid_argument(
            json!({"action": "key", "text": "enter", "coordinate": [1, 1]}),
            "coordinate is not accepted for key",
        );
    }

    #[test]
    fn test_text_must_be_string() {
        assert_invalid_argument(json!({"action": "type", "text": 42}), "text must be a string");
        assert_invalid_argument(
            json!({"action": "key", "text": ["ctrl", "c"]}),
            "text must be a string",
        );
    }

    #[test]
    fn test_no_argument_actions_valid() {
        for (name, expected) in [
            ("left_click", Action::LeftClick),
            ("right_click", Action::RightClick),
            ("middle_click", Action::MiddleClick),
            ("double_click", Action::DoubleClick),
            ("screenshot", Action::Screenshot),
            ("cursor_position", Action::CursorPosition),
        ] {
            assert_eq!(validate(&ActionRequest::new(name)).unwrap(), expected);
        }
    }

    #[test]
    fn test_left_click_rejects_coordinate() {
        assert_invalid_argument(
            json!({"action": "left_click", "coordinate": [5, 5]}),
            "coordinate is not accepted for left_click",
        );
    }

    #[test]
    fn test_screenshot_rejects_text() {
        assert_invalid_argument(
            json!({"action": "screenshot", "text": "now"}),
            "text is not accepted for screenshot",
        );
    }

    #[test]
    fn test_unknown_action_is_invalid_action_regardless_of_fields() {
        for value in [
            json!({"action": "nonexistent"}),
            json!({"action": "nonexistent", "text": "a"}),
            json!({"action": "nonexistent", "coordinate": [1, 2]}),
            json!({"action": "nonexistent", "text": 1, "coordinate": "bad"}),
        ] {
            match validate(&request(value)) {
                Err(ComputerError::InvalidAction(name)) => assert_eq!(name, "nonexistent"),
                other => panic!("expected InvalidAction, got {other:?}"),
            }
        }
    }
}
