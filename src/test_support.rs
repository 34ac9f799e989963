//! Shared fixtures for unit tests.

use checklist_core::form::{Form, FormDefinition};

/// Two sections, a name selector, one label override, one comment field.
pub(crate) const KITCHEN_FORM: &str = r#"
[choices]
qty = [
    { value = "1", ru = "1 шт", en = "1 pc" },
    { value = "2", ru = "2 шт", en = "2 pcs" },
]

[name]
key = "chef"
choices = [
    { value = "ivan", ru = "Иван", en = "Ivan" },
    { value = "olga", ru = "Ольга" },
]

[[sections]]
key = "soups"
title = { ru = "Супы", en = "Soups" }
comment = "soups_comment"

[[sections.items]]
key = "borscht"
label = { ru = "Борщ", en = "Borscht" }
label_override = { en = "Borscht (pot)" }

[[sections.items]]
key = "solyanka"
label = { ru = "Солянка", en = "Solyanka" }

[[sections]]
key = "salads"
title = { ru = "Салаты", en = "Salads" }

[[sections.items]]
key = "olivier"
label = { ru = "Оливье", en = "Olivier" }
"#;

pub(crate) fn kitchen_form() -> Form {
    FormDefinition::parse(KITCHEN_FORM)
        .unwrap()
        .build("ru")
        .unwrap()
}
