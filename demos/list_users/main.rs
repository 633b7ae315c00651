//! User Listing Example
//!
//! Seeds an in-memory user repository and runs a few searches through the
//! `ListUsersUseCase`:
//! - default listing (newest first, 15 per page)
//! - name filter with ascending name sort
//! - malformed paging input falling back to the defaults
//!
//! Set `SEARCH_CONFIG=path/to/search.yaml` to override the page defaults and
//! `RUST_LOG=searchable=debug` to see the pipeline logs.

use anyhow::Result;
use chrono::Duration;
use searchable::prelude::*;
use searchable::users::ListUsersUseCase;
use serde_json::json;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var("SEARCH_CONFIG") {
        Ok(path) => SearchConfig::from_yaml_file(&path)?,
        Err(_) => SearchConfig::default(),
    };

    let repository = Arc::new(InMemoryUserRepository::default());
    populate_test_data(repository.as_ref()).await?;

    let use_case = ListUsersUseCase::with_config(repository, config);

    println!("📋 Default listing:");
    print_page(&use_case, SearchProps::new()).await?;

    println!("\n🔎 Names containing \"an\", sorted by name:");
    print_page(
        &use_case,
        SearchProps::new()
            .filter(json!({"name": "an"}))
            .sort("name")
            .sort_direction("asc"),
    )
    .await?;

    println!("\n🧹 Malformed input (page=-3, perPage=\"abc\", sortDir=\"sideways\"):");
    print_page(
        &use_case,
        SearchProps::new()
            .page(-3)
            .per_page("abc")
            .sort("createdAt")
            .sort_direction("sideways"),
    )
    .await?;

    Ok(())
}

async fn print_page(use_case: &ListUsersUseCase, input: SearchProps) -> Result<()> {
    let output = use_case.execute(input).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn populate_test_data(repository: &InMemoryUserRepository) -> Result<()> {
    let start = Utc::now() - Duration::days(30);
    let names = [
        "Alice Martin",
        "bob stone",
        "Carla Diaz",
        "Daniel Kim",
        "eve Johnson",
        "Frank Moreau",
        "Grace Hopper",
        "hannah Lee",
    ];

    for (i, name) in names.into_iter().enumerate() {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        let props = UserProps::new(name, email, "changeme")
            .with_created_at(start + Duration::days(i as i64));
        repository.insert(UserEntity::new(props, None)?).await?;
    }

    Ok(())
}
