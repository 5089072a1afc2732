//! Resource fixtures for creating in-memory test data.

use entity::{
    resource::{self, ResourceStatus},
    text_list::TextList,
};

/// Default test resource description.
pub const DEFAULT_DESCRIPTION: &str = "Test Projector";

/// Default resource type ID.
pub const DEFAULT_RESOURCE_TYPE_ID: i32 = 1;

/// Default resource status.
pub const DEFAULT_STATUS: ResourceStatus = ResourceStatus::Available;

/// Default characteristics attached to a test resource.
pub fn default_characteristics() -> Vec<String> {
    vec!["HDMI".to_string(), "1080p".to_string()]
}

/// Creates a resource entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - resource_type_id: `1`
/// - description: `"Test Projector"`
/// - status: `available`
/// - characteristics: `["HDMI", "1080p"]`
///
/// # Returns
/// - `resource::Model` - In-memory resource entity
pub fn entity() -> resource::Model {
    entity_builder().build()
}

/// Creates a resource entity builder for customization.
///
/// # Returns
/// - `ResourceEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// let resource = fixture::resource::entity_builder()
///     .status(ResourceStatus::Reserved)
///     .build();
/// ```
pub fn entity_builder() -> ResourceEntityBuilder {
    ResourceEntityBuilder::default()
}

/// Builder for creating customized resource entity models.
pub struct ResourceEntityBuilder {
    id: i32,
    resource_type_id: i32,
    description: String,
    status: ResourceStatus,
    characteristics: Vec<String>,
}

impl Default for ResourceEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            resource_type_id: DEFAULT_RESOURCE_TYPE_ID,
            description: DEFAULT_DESCRIPTION.to_string(),
            status: DEFAULT_STATUS,
            characteristics: default_characteristics(),
        }
    }
}

impl ResourceEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn resource_type_id(mut self, resource_type_id: i32) -> Self {
        self.resource_type_id = resource_type_id;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: ResourceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn characteristics(mut self, characteristics: Vec<String>) -> Self {
        self.characteristics = characteristics;
        self
    }

    /// Builds and returns the resource entity model.
    ///
    /// # Returns
    /// - `resource::Model` - In-memory resource entity with configured values
    pub fn build(self) -> resource::Model {
        resource::Model {
            id: self.id,
            resource_type_id: self.resource_type_id,
            description: self.description,
            status: self.status,
            characteristics: TextList(self.characteristics),
        }
    }
}
