use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use model::entities::{account, account::AccountType, category};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Database, EntityTrait, PaginatorTrait, Set};
use tracing::{debug, info};

/// Default category tree: top-level groups with their child categories.
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    ("Income", &["Salary", "Freelance", "Investments"]),
    ("Housing", &["Rent/Mortgage", "Utilities"]),
    ("Transportation", &["Fuel", "Public Transport"]),
    ("Food", &["Groceries", "Dining Out"]),
    ("Personal", &["Healthcare", "Entertainment"]),
];

pub async fn seed_database(database_url: &str) -> Result<()> {
    info!("Seeding database");
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;

    // Seeding is skipped on an already-populated database so the command
    // stays safe to re-run.
    let existing = category::Entity::find().count(&db).await?;
    if existing > 0 {
        info!("Database already contains {} categories, skipping seed", existing);
        return Ok(());
    }

    for (parent_name, children) in DEFAULT_CATEGORIES {
        let parent = category::ActiveModel {
            name: Set((*parent_name).to_string()),
            parent_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        debug!("Seeded category {} ({})", parent.name, parent.id);

        for child_name in *children {
            category::ActiveModel {
                name: Set((*child_name).to_string()),
                parent_id: Set(Some(parent.id)),
                ..Default::default()
            }
            .insert(&db)
            .await?;
        }
    }

    let accounts = [
        ("Cash Wallet", AccountType::Cash, None),
        ("Main Bank Account", AccountType::Bank, Some(Decimal::from(20_000))),
        ("Mobile Money", AccountType::MobileMoney, Some(Decimal::from(15_000))),
    ];
    for (name, kind, spending_limit) in accounts {
        let created = account::ActiveModel {
            name: Set(name.to_string()),
            kind: Set(kind),
            spending_limit: Set(spending_limit),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        debug!("Seeded account {} ({})", created.name, created.id);
    }

    info!("Database seeded with default categories and accounts");
    Ok(())
}
