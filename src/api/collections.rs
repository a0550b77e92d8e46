use serde::Deserialize;

/// A single collection as returned by `/api/collections`.
/// The API sends many more fields (schema, rules, timestamps); only the two
/// we print are kept.
#[derive(Deserialize, Debug, Clone)]
pub struct Collection {
    pub id: String,
    pub name: String,
}

impl Collection {
    /// System collections are named with a leading `_` (e.g. `_superusers`)
    /// and are hidden from user-facing listings.
    pub fn is_system(&self) -> bool {
        self.name.starts_with('_')
    }
}

/// The paged envelope around a collection listing.
#[derive(Deserialize, Debug)]
pub struct CollectionList {
    pub items: Vec<Collection>,
}

impl CollectionList {
    /// All non-system collections, in response order.
    pub fn custom(&self) -> impl Iterator<Item = &Collection> {
        self.items.iter().filter(|collection| !collection.is_system())
    }

    /// Renders the listing for stdout: a header, one `  name: id` line per
    /// custom collection in response order, and a trailing count.
    pub fn render_report(&self) -> String {
        let mut report = String::from("Custom collections:\n");
        for collection in self.custom() {
            report.push_str(&format!("  {}: {}\n", collection.name, collection.id));
        }
        report.push_str(&format!(
            "\nTotal: {} custom collections\n",
            self.custom().count()
        ));
        report
    }
}
