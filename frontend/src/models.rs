// Re-export the shared crate's data model
pub use backoffice_shared::{Category, CategoryPayload};

// =============== Mock data ===============

/// Fixture categories for running the UI without a backend.
#[cfg(feature = "mock")]
pub fn mock_categories() -> Vec<Category> {
    [
        (1, "Books", "All books"),
        (2, "Toys", "Kids toys"),
        (3, "Electronics", "Phones, laptops and accessories"),
        (4, "Home", "Furniture and household goods"),
        (5, "Fashion", "Clothing and footwear"),
    ]
    .into_iter()
    .map(|(id, name, description)| Category {
        id,
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Echo a created category the way the service would, with a fresh id
/// past the fixture range.
#[cfg(feature = "mock")]
pub fn mock_create_category(payload: &CategoryPayload) -> Category {
    Category {
        id: mock_categories().len() as i64 + 1,
        name: payload.name.trim().to_string(),
        description: payload.description.trim().to_string(),
    }
}
