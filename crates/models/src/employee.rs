use serde::{Deserialize, Deserializer, Serialize};

/// Employee record as stored and returned by the API.
/// `id` is assigned by the store and never changes afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

/// Create/update payload. Absent or `null` fields fall back to their defaults,
/// so an update replaces the whole record. Any `id` in the body is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmployeeInput {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl EmployeeInput {
    /// Attach an id, producing the stored record.
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            department: self.department,
            salary: self.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_ignores_id_and_defaults_missing_fields() -> Result<(), anyhow::Error> {
        let input: EmployeeInput =
            serde_json::from_str(r#"{"id": 42, "name": "Ann", "salary": 90000}"#)?;
        assert_eq!(input.name, "Ann");
        assert_eq!(input.department, "");
        assert_eq!(input.position, "");

        let emp = input.into_employee(7);
        assert_eq!(emp.id, 7);
        assert_eq!(emp.salary, 90000.0);
        Ok(())
    }

    #[test]
    fn employee_json_shape() -> Result<(), anyhow::Error> {
        let emp = Employee {
            id: 1,
            name: "Ann".into(),
            position: "Eng".into(),
            department: "R&D".into(),
            salary: 90000.0,
        };
        let value = serde_json::to_value(&emp)?;
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Ann", "position": "Eng", "department": "R&D", "salary": 90000.0})
        );
        Ok(())
    }

    #[test]
    fn input_null_fields_take_defaults() -> Result<(), anyhow::Error> {
        let input: EmployeeInput =
            serde_json::from_str(r#"{"name": "Ann", "department": null, "salary": null}"#)?;
        assert_eq!(input.name, "Ann");
        assert_eq!(input.department, "");
        assert_eq!(input.salary, 0.0);
        Ok(())
    }

    #[test]
    fn input_rejects_wrong_field_types() {
        let res = serde_json::from_str::<EmployeeInput>(r#"{"name": "Ann", "salary": "lots"}"#);
        assert!(res.is_err());
    }
}
