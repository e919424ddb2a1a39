use super::models::{CreateIssueRequest, Coordinates, DEFAULT_CATEGORY};

/// Report form state. Produces the payload for `POST /api/issues`.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub contact: String,
    pub coordinates: Option<Coordinates>,
}

impl Default for IssueForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            location: String::new(),
            contact: String::new(),
            coordinates: None,
        }
    }
}

impl IssueForm {
    /// Pin the report to a captured position; overwrites the location text.
    pub fn use_coordinates(&mut self, coordinates: Coordinates) {
        self.location = coordinates.to_location();
        self.coordinates = Some(coordinates);
    }

    pub fn to_request(&self) -> CreateIssueRequest {
        CreateIssueRequest {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            location: Some(self.location.clone()),
            contact: Some(self.contact.clone()).filter(|c| !c.is_empty()),
        }
    }

    /// Clear the form back to its initial state after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_safety() {
        let form = IssueForm::default();
        assert_eq!(form.category, "Safety");
        assert!(form.coordinates.is_none());
    }

    #[test]
    fn test_empty_contact_omitted() {
        let form = IssueForm {
            title: "Pothole".into(),
            description: "Deep".into(),
            location: "Elm St".into(),
            ..IssueForm::default()
        };
        let req = form.to_request();
        assert_eq!(req.contact, None);
        assert!(req.missing_fields().is_empty());
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("contact").is_none());
    }

    #[test]
    fn test_blank_form_reports_missing_fields() {
        let req = IssueForm::default().to_request();
        assert_eq!(req.missing_fields(), vec!["title", "description", "location"]);
    }

    #[test]
    fn test_use_coordinates_fills_location() {
        let mut form = IssueForm::default();
        form.use_coordinates(Coordinates {
            latitude: 51.5,
            longitude: -0.12346,
        });
        assert_eq!(form.location, "51.5000, -0.1235");
        assert!(form.coordinates.is_some());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = IssueForm {
            title: "x".into(),
            contact: "y".into(),
            category: "Health".into(),
            ..IssueForm::default()
        };
        form.reset();
        assert_eq!(form, IssueForm::default());
    }
}
