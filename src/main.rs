use anyhow::Result;
use chatty::{DiskStore, Item, ItemStore};
use chrono::Utc;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut store = DiskStore::open("chatty.db")?;
    store.insert(Item::new(Utc::now()))?;
    store.flush()?;

    let items = store.items()?;
    info!(count = items.len(), "stored records");
    println!("{}", serde_json::to_string_pretty(&items)?);

    Ok(())
}
