//! Field-by-field validation of the create-reading body.
//!
//! Every field is checked before anything is returned, so a single response
//! lists all failing fields at once.

use serde_json::{Map, Value};

use super::{
    dto::CreateSensorReadingRequest,
    errors::{ApiError, FieldErrors},
};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const INVALID_NUMBER: &str = "A valid number is required.";
pub const INVALID_BOOLEAN: &str = "Must be a valid boolean.";

const TRUE_STRINGS: &[&str] = &["true", "t", "yes", "y", "on", "1"];
const FALSE_STRINGS: &[&str] = &["false", "f", "no", "n", "off", "0"];

pub fn parse_create_request(body: &Value) -> Result<CreateSensorReadingRequest, ApiError> {
    let Value::Object(object) = body else {
        return Err(ApiError::field(
            "non_field_errors",
            &format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_kind(body)
            ),
        ));
    };

    let mut fields = FieldReader::new(object);
    let humidity = fields.number("umidade");
    let temperature = fields.number("temperatura");
    let luminosity = fields.number("luminosidade");
    let irrigation_active = fields.boolean("irrigacao_ativa");
    let nitrogen = fields.number("nitrogenio");
    let phosphorus = fields.number("fosforo");
    let potassium = fields.number("potassio");

    match (
        humidity,
        temperature,
        luminosity,
        irrigation_active,
        nitrogen,
        phosphorus,
        potassium,
    ) {
        (
            Some(humidity),
            Some(temperature),
            Some(luminosity),
            Some(irrigation_active),
            Some(nitrogen),
            Some(phosphorus),
            Some(potassium),
        ) => Ok(CreateSensorReadingRequest {
            humidity,
            temperature,
            luminosity,
            irrigation_active,
            nitrogen,
            phosphorus,
            potassium,
        }),
        _ => Err(ApiError::Validation(fields.into_errors())),
    }
}

/// Reads typed fields out of a JSON object, recording a message for each
/// field that is missing or has the wrong shape.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            errors: FieldErrors::new(),
        }
    }

    fn number(&mut self, name: &str) -> Option<f64> {
        let value = self.present(name)?;
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match parsed {
            Some(n) if n.is_finite() => Some(n),
            _ => self.reject(name, INVALID_NUMBER),
        }
    }

    fn boolean(&mut self, name: &str) -> Option<bool> {
        let value = self.present(name)?;
        let parsed = match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_f64() {
                Some(v) if v == 1.0 => Some(true),
                Some(v) if v == 0.0 => Some(false),
                _ => None,
            },
            Value::String(s) => {
                let s = s.trim().to_ascii_lowercase();
                if TRUE_STRINGS.contains(&s.as_str()) {
                    Some(true)
                } else if FALSE_STRINGS.contains(&s.as_str()) {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        };

        match parsed {
            Some(b) => Some(b),
            None => self.reject(name, INVALID_BOOLEAN),
        }
    }

    /// The field's value, or `None` after recording why it is unusable.
    fn present(&mut self, name: &str) -> Option<&'a Value> {
        let object = self.object;
        match object.get(name) {
            None => self.reject(name, REQUIRED),
            Some(Value::Null) => self.reject(name, NOT_NULL),
            Some(value) => Some(value),
        }
    }

    fn reject<T>(&mut self, name: &str, message: &str) -> Option<T> {
        self.errors
            .entry(name.to_owned())
            .or_default()
            .push(message.to_owned());
        None
    }

    fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_body() -> Value {
        json!({
            "umidade": 55.2,
            "temperatura": 23.4,
            "luminosidade": 812.0,
            "irrigacao_ativa": true,
            "nitrogenio": 12.1,
            "fosforo": 4.4,
            "potassio": 9.9,
        })
    }

    fn field_errors(body: &Value) -> FieldErrors {
        match parse_create_request(body) {
            Err(ApiError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_complete_payload() {
        let request = parse_create_request(&valid_body()).unwrap();
        assert_eq!(
            request,
            CreateSensorReadingRequest {
                humidity: 55.2,
                temperature: 23.4,
                luminosity: 812.0,
                irrigation_active: true,
                nitrogen: 12.1,
                phosphorus: 4.4,
                potassium: 9.9,
            }
        );
    }

    #[test]
    fn ignores_unknown_and_server_assigned_fields() {
        let mut body = valid_body();
        body["id"] = json!(999);
        body["data"] = json!("1999-01-01");
        body["hora"] = json!("00:00:00");
        body["firmware"] = json!("v2");

        assert!(parse_create_request(&body).is_ok());
    }

    #[test]
    fn each_missing_field_is_reported() {
        for name in [
            "umidade",
            "temperatura",
            "luminosidade",
            "irrigacao_ativa",
            "nitrogenio",
            "fosforo",
            "potassio",
        ] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(name);

            let errors = field_errors(&body);
            assert_eq!(errors.len(), 1, "only {name} should fail");
            assert_eq!(errors[name], vec![REQUIRED]);
        }
    }

    #[test]
    fn empty_object_reports_all_fields() {
        let errors = field_errors(&json!({}));
        assert_eq!(errors.len(), 7);
        assert!(errors.values().all(|m| m == &vec![REQUIRED]));
    }

    #[test]
    fn null_is_rejected() {
        let mut body = valid_body();
        body["temperatura"] = Value::Null;

        let errors = field_errors(&body);
        assert_eq!(errors["temperatura"], vec![NOT_NULL]);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let mut body = valid_body();
        body["umidade"] = json!(" 61.5 ");
        body["potassio"] = json!("3");

        let request = parse_create_request(&body).unwrap();
        assert_eq!(request.humidity, 61.5);
        assert_eq!(request.potassium, 3.0);
    }

    #[test]
    fn wrong_number_types_are_rejected() {
        let mut body = valid_body();
        body["umidade"] = json!("wet");
        body["fosforo"] = json!([1.0]);
        body["nitrogenio"] = json!("NaN");
        body["luminosidade"] = json!(true);

        let errors = field_errors(&body);
        assert_eq!(errors.len(), 4);
        for name in ["umidade", "fosforo", "nitrogenio", "luminosidade"] {
            assert_eq!(errors[name], vec![INVALID_NUMBER]);
        }
    }

    #[test]
    fn boolean_accepts_common_spellings() {
        for (raw, expected) in [
            (json!(false), false),
            (json!(1), true),
            (json!(0), false),
            (json!("True"), true),
            (json!("off"), false),
            (json!("y"), true),
        ] {
            let mut body = valid_body();
            body["irrigacao_ativa"] = raw;
            assert_eq!(
                parse_create_request(&body).unwrap().irrigation_active,
                expected
            );
        }
    }

    #[test]
    fn boolean_rejects_other_values() {
        for raw in [json!(2), json!("maybe"), json!({})] {
            let mut body = valid_body();
            body["irrigacao_ativa"] = raw;

            let errors = field_errors(&body);
            assert_eq!(errors["irrigacao_ativa"], vec![INVALID_BOOLEAN]);
        }
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = field_errors(&json!([valid_body()]));
        assert_eq!(
            errors["non_field_errors"],
            vec!["Invalid data. Expected a dictionary, but got array."]
        );
    }
}
