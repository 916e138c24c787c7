use bson::Document;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};

///
/// Creates collection and its unique index unless they already exist
///
pub async fn create_collection_with_unique_index(
    database: &Database,
    collection_name: &str,
    index_name: &str,
    field: &str,
) -> Result<(), mongodb::error::Error> {
    let collection_names = database.list_collection_names().await?;
    if !collection_names.iter().any(|name| name == collection_name) {
        tracing::debug!(collection = collection_name, "creating collection");
        database.create_collection(collection_name).await?;
    }

    let collection = database.collection::<Document>(collection_name);

    tracing::debug!(collection = collection_name, "fetching index names");
    let index_names = collection.list_index_names().await?;

    if !index_names.iter().any(|name| name == index_name) {
        create_unique_index(&collection, index_name, field).await?;
        tracing::debug!(
            collection = collection_name,
            index = index_name,
            "created index"
        );
    }

    Ok(())
}

async fn create_unique_index(
    collection: &Collection<Document>,
    index_name: &str,
    field: &str,
) -> Result<(), mongodb::error::Error> {
    let mut keys = Document::new();
    keys.insert(field, 1);

    let index = IndexModel::builder()
        .keys(keys)
        .options(
            IndexOptions::builder()
                .name(index_name.to_string())
                .unique(true)
                .build(),
        )
        .build();

    collection.create_index(index).await?;

    Ok(())
}
