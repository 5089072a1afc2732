//! Discipline fixtures for creating in-memory test data.

use entity::{discipline, text_list::TextList};

/// Default test discipline name.
pub const DEFAULT_NAME: &str = "Algorithms";

/// Default credit count.
pub const DEFAULT_CREDITS: i32 = 4;

/// Default program text.
pub const DEFAULT_PROGRAM: &str = "Sorting, searching and graph algorithms";

/// Creates a discipline entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Algorithms"`
/// - credits: `4`
/// - program: `"Sorting, searching and graph algorithms"`
/// - bibliography: `["Introduction to Algorithms"]`
///
/// # Returns
/// - `discipline::Model` - In-memory discipline entity
pub fn entity() -> discipline::Model {
    entity_builder().build()
}

/// Creates a discipline entity builder for customization.
pub fn entity_builder() -> DisciplineEntityBuilder {
    DisciplineEntityBuilder::default()
}

/// Builder for creating customized discipline entity models.
pub struct DisciplineEntityBuilder {
    id: i32,
    name: String,
    credits: i32,
    program: String,
    bibliography: Vec<String>,
}

impl Default for DisciplineEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            credits: DEFAULT_CREDITS,
            program: DEFAULT_PROGRAM.to_string(),
            bibliography: vec!["Introduction to Algorithms".to_string()],
        }
    }
}

impl DisciplineEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn bibliography(mut self, bibliography: Vec<String>) -> Self {
        self.bibliography = bibliography;
        self
    }

    pub fn build(self) -> discipline::Model {
        discipline::Model {
            id: self.id,
            name: self.name,
            credits: self.credits,
            program: self.program,
            bibliography: TextList(self.bibliography),
        }
    }
}
