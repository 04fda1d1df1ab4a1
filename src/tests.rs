#[cfg(test)]
mod integration_tests {
    use crate::handlers::accounts::{CreateAccountRequest, UpdateAccountRequest};
    use crate::handlers::categories::{CreateCategoryRequest, UpdateCategoryRequest};
    use crate::handlers::transactions::CreateTransactionRequest;
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{Days, Utc};
    use model::entities::account::AccountType;
    use model::entities::transaction::TransactionKind;
    use rust_decimal::Decimal;

    async fn create_account(
        server: &TestServer,
        name: &str,
        kind: AccountType,
        spending_limit: Option<Decimal>,
    ) -> i64 {
        let response = server
            .post("/api/accounts")
            .json(&CreateAccountRequest {
                name: name.to_string(),
                kind,
                spending_limit,
            })
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        body.data["id"].as_i64().unwrap()
    }

    async fn create_category(server: &TestServer, name: &str, parent_id: Option<i32>) -> i64 {
        let response = server
            .post("/api/categories")
            .json(&CreateCategoryRequest {
                name: name.to_string(),
                parent_id,
            })
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        body.data["id"].as_i64().unwrap()
    }

    async fn create_transaction(
        server: &TestServer,
        account_id: i64,
        category_id: i64,
        amount: Decimal,
        kind: TransactionKind,
    ) -> serde_json::Value {
        let response = server
            .post("/api/transactions")
            .json(&CreateTransactionRequest {
                account_id: account_id as i32,
                category_id: category_id as i32,
                amount,
                kind,
                description: "test transaction".to_string(),
            })
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        body.data
    }

    async fn account_notifications(server: &TestServer, account_id: i64) -> Vec<serde_json::Value> {
        let response = server
            .get(&format!("/api/notifications?account_id={account_id}"))
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        body.data
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_account_round_trip() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_account(
            &server,
            "Main Bank Account",
            AccountType::Bank,
            Some(Decimal::from(20_000)),
        )
        .await;

        let response = server.get(&format!("/api/accounts/{id}")).await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["name"], "Main Bank Account");
        assert_eq!(body.data["type"], "bank");
        assert_eq!(body.data["spending_limit"], "20000");
        // No transactions yet, both derived fields are zero
        assert_eq!(body.data["current_balance"], "0");
        assert_eq!(body.data["current_month_spending"], "0");
    }

    #[tokio::test]
    async fn test_list_accounts_ordered_by_name() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        create_account(&server, "Wallet", AccountType::Cash, None).await;
        create_account(&server, "Bank", AccountType::Bank, None).await;

        let response = server.get("/api/accounts").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        let names: Vec<&str> = body.data.iter().map(|a| a["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Bank", "Wallet"]);
    }

    #[tokio::test]
    async fn test_create_account_validation() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Empty name
        let response = server
            .post("/api/accounts")
            .json(&CreateAccountRequest {
                name: "   ".to_string(),
                kind: AccountType::Cash,
                spending_limit: None,
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("name"));

        // Non-positive spending limit
        let response = server
            .post("/api/accounts")
            .json(&CreateAccountRequest {
                name: "Wallet".to_string(),
                kind: AccountType::Cash,
                spending_limit: Some(Decimal::ZERO),
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_and_delete_account() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_account(&server, "Old Name", AccountType::Cash, None).await;

        let response = server
            .put(&format!("/api/accounts/{id}"))
            .json(&UpdateAccountRequest {
                name: "New Name".to_string(),
                kind: AccountType::MobileMoney,
                spending_limit: Some(Decimal::from(500)),
            })
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["name"], "New Name");
        assert_eq!(body.data["type"], "mobile_money");
        assert_eq!(body.data["spending_limit"], "500");

        let response = server.delete(&format!("/api/accounts/{id}")).await;
        response.assert_status(StatusCode::OK);

        let response = server.get(&format!("/api/accounts/{id}")).await;
        response.assert_status(StatusCode::NOT_FOUND);

        // Deleting again reports not found
        let response = server.delete(&format!("/api/accounts/{id}")).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_category_list_groups_parents_with_children() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let food = create_category(&server, "Food", None).await;
        create_category(&server, "Dining Out", Some(food as i32)).await;
        let housing = create_category(&server, "Housing", None).await;
        create_category(&server, "Rent", Some(housing as i32)).await;

        let response = server.get("/api/categories").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        let names: Vec<&str> = body.data.iter().map(|c| c["name"].as_str().unwrap()).collect();
        // Each parent group is contiguous, names alphabetical inside a group
        assert_eq!(names, vec!["Dining Out", "Food", "Housing", "Rent"]);
    }

    #[tokio::test]
    async fn test_category_tree() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let food = create_category(&server, "Food", None).await;
        create_category(&server, "Groceries", Some(food as i32)).await;
        create_category(&server, "Dining Out", Some(food as i32)).await;
        create_category(&server, "Personal", None).await;

        let response = server.get("/api/categories/tree").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 2);

        let food_node = body
            .data
            .iter()
            .find(|n| n["name"] == "Food")
            .expect("Food node missing");
        let children: Vec<&str> = food_node["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(children.len(), 2);
        assert!(children.contains(&"Groceries"));
        assert!(children.contains(&"Dining Out"));

        let personal_node = body.data.iter().find(|n| n["name"] == "Personal").unwrap();
        assert!(personal_node["children"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_category_parent_validation() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Missing parent
        let response = server
            .post("/api/categories")
            .json(&CreateCategoryRequest {
                name: "Orphan".to_string(),
                parent_id: Some(999),
            })
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        // A child cannot itself become a parent
        let food = create_category(&server, "Food", None).await;
        let groceries = create_category(&server, "Groceries", Some(food as i32)).await;
        let response = server
            .post("/api/categories")
            .json(&CreateCategoryRequest {
                name: "Too Deep".to_string(),
                parent_id: Some(groceries as i32),
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_category_reparents() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let food = create_category(&server, "Food", None).await;
        let snacks = create_category(&server, "Snacks", None).await;

        let response = server
            .put(&format!("/api/categories/{snacks}"))
            .json(&UpdateCategoryRequest {
                name: "Snacks".to_string(),
                parent_id: Some(food as i32),
            })
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["parent_id"], food);
    }

    #[tokio::test]
    async fn test_update_category_rejects_self_parent() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let food = create_category(&server, "Food", None).await;

        let response = server
            .put(&format!("/api/categories/{food}"))
            .json(&UpdateCategoryRequest {
                name: "Food".to_string(),
                parent_id: Some(food as i32),
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        // The category is still top-level
        let response = server.get("/api/categories").await;
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.data[0]["parent_id"].is_null());
    }

    #[tokio::test]
    async fn test_update_category_rejects_nesting_a_parent_with_children() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let food = create_category(&server, "Food", None).await;
        create_category(&server, "Groceries", Some(food as i32)).await;
        let personal = create_category(&server, "Personal", None).await;

        // Nesting Food under Personal would push Groceries to depth three
        let response = server
            .put(&format!("/api/categories/{food}"))
            .json(&UpdateCategoryRequest {
                name: "Food".to_string(),
                parent_id: Some(personal as i32),
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        // Food stays a top-level node with its child attached
        let response = server.get("/api/categories/tree").await;
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        let food_node = body.data.iter().find(|n| n["name"] == "Food").unwrap();
        assert_eq!(food_node["children"].as_array().unwrap().len(), 1);

        // A childless category can still be reparented
        let response = server
            .put(&format!("/api/categories/{personal}"))
            .json(&UpdateCategoryRequest {
                name: "Personal".to_string(),
                parent_id: Some(food as i32),
            })
            .await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_category_cascades_to_transactions() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(&server, "Wallet", AccountType::Cash, None).await;
        let food = create_category(&server, "Food", None).await;
        let other = create_category(&server, "Other", None).await;

        create_transaction(&server, account, food, Decimal::from(10), TransactionKind::Expense)
            .await;
        create_transaction(&server, account, food, Decimal::from(20), TransactionKind::Expense)
            .await;
        create_transaction(&server, account, other, Decimal::from(30), TransactionKind::Expense)
            .await;

        let response = server.delete(&format!("/api/categories/{food}")).await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<String> = response.json();
        assert!(body.data.contains("2 transactions"));

        // Only the transaction in the surviving category remains
        let response = server.get("/api/transactions").await;
        let list: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0]["category_id"], other);
    }

    #[tokio::test]
    async fn test_category_delete_unit_rolls_back_without_commit() {
        use crate::test_utils::test_utils::setup_test_db;
        use model::entities::{account, category, transaction};
        use sea_orm::{
            ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
            TransactionTrait,
        };

        let db = setup_test_db().await;

        let wallet = account::ActiveModel {
            name: Set("Wallet".to_string()),
            kind: Set(AccountType::Cash),
            spending_limit: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let food = category::ActiveModel {
            name: Set("Food".to_string()),
            parent_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        transaction::ActiveModel {
            account_id: Set(wallet.id),
            category_id: Set(food.id),
            amount: Set(Decimal::from(10)),
            kind: Set(TransactionKind::Expense),
            description: Set("groceries".to_string()),
            date: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        // Same unit shape as the delete handler, aborted between the two
        // statements: the transaction delete must not survive on its own.
        let txn = db.begin().await.unwrap();
        let removed = transaction::Entity::delete_many()
            .filter(transaction::Column::CategoryId.eq(food.id))
            .exec(&txn)
            .await
            .unwrap();
        assert_eq!(removed.rows_affected, 1);
        txn.rollback().await.unwrap();

        // Zero rows removed
        assert_eq!(transaction::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(category::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_category() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.delete("/api/categories/42").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_transaction_updates_balance() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(&server, "Wallet", AccountType::Cash, None).await;
        let salary = create_category(&server, "Salary", None).await;
        let food = create_category(&server, "Food", None).await;

        create_transaction(&server, account, salary, Decimal::from(1000), TransactionKind::Income)
            .await;
        create_transaction(&server, account, food, Decimal::from(300), TransactionKind::Expense)
            .await;

        let response = server.get(&format!("/api/accounts/{account}")).await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["current_balance"], "700");
        assert_eq!(body.data["current_month_spending"], "300");
    }

    #[tokio::test]
    async fn test_create_transaction_rejects_non_positive_amount() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(&server, "Wallet", AccountType::Cash, None).await;
        let food = create_category(&server, "Food", None).await;

        let response = server
            .post("/api/transactions")
            .json(&CreateTransactionRequest {
                account_id: account as i32,
                category_id: food as i32,
                amount: Decimal::from(-5),
                kind: TransactionKind::Expense,
                description: "bad".to_string(),
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_transaction_missing_category_persists_nothing() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(&server, "Wallet", AccountType::Cash, None).await;

        let response = server
            .post("/api/transactions")
            .json(&CreateTransactionRequest {
                account_id: account as i32,
                category_id: 999,
                amount: Decimal::from(50),
                kind: TransactionKind::Expense,
                description: "dangling".to_string(),
            })
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.get("/api/transactions").await;
        let list: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(list.data.is_empty());
        assert!(account_notifications(&server, account).await.is_empty());
    }

    #[tokio::test]
    async fn test_spending_limit_notification_tiers() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(
            &server,
            "Budgeted",
            AccountType::Bank,
            Some(Decimal::from(1000)),
        )
        .await;
        let salary = create_category(&server, "Salary", None).await;
        let food = create_category(&server, "Food", None).await;

        // Income keeps the balance positive so only the limit rule fires
        create_transaction(&server, account, salary, Decimal::from(10_000), TransactionKind::Income)
            .await;
        assert!(account_notifications(&server, account).await.is_empty());

        // 500 of 1000: below every tier
        create_transaction(&server, account, food, Decimal::from(500), TransactionKind::Expense)
            .await;
        assert!(account_notifications(&server, account).await.is_empty());

        // 750 of 1000: notice tier
        create_transaction(&server, account, food, Decimal::from(250), TransactionKind::Expense)
            .await;
        let notifications = account_notifications(&server, account).await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0]["type"], "limit_exceed");
        assert_eq!(notifications[0]["message"], "Notice: 75% of spending limit used");

        // 900 of 1000: warning tier
        create_transaction(&server, account, food, Decimal::from(150), TransactionKind::Expense)
            .await;
        let notifications = account_notifications(&server, account).await;
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0]["message"], "Warning: 90% of spending limit used");

        // 1000 of 1000: limit reached
        create_transaction(&server, account, food, Decimal::from(100), TransactionKind::Expense)
            .await;
        let notifications = account_notifications(&server, account).await;
        assert_eq!(notifications.len(), 3);
        assert_eq!(notifications[0]["type"], "limit_exceed");
        assert!(notifications[0]["message"]
            .as_str()
            .unwrap()
            .starts_with("Spending limit exceeded"));
        assert_eq!(notifications[0]["is_read"], false);
    }

    #[tokio::test]
    async fn test_income_never_triggers_limit_notifications() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(
            &server,
            "Budgeted",
            AccountType::Bank,
            Some(Decimal::from(100)),
        )
        .await;
        let salary = create_category(&server, "Salary", None).await;

        // Far above the limit, but income is not spending
        create_transaction(&server, account, salary, Decimal::from(5000), TransactionKind::Income)
            .await;
        assert!(account_notifications(&server, account).await.is_empty());
    }

    #[tokio::test]
    async fn test_low_balance_notification_without_limit() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(&server, "Wallet", AccountType::Cash, None).await;
        let food = create_category(&server, "Food", None).await;

        create_transaction(&server, account, food, Decimal::from(150), TransactionKind::Expense)
            .await;

        let notifications = account_notifications(&server, account).await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0]["type"], "low_balance");
        assert!(notifications[0]["message"]
            .as_str()
            .unwrap()
            .starts_with("Low balance"));
    }

    #[tokio::test]
    async fn test_low_balance_fires_alongside_limit_alert() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(
            &server,
            "Budgeted",
            AccountType::Bank,
            Some(Decimal::from(100)),
        )
        .await;
        let food = create_category(&server, "Food", None).await;

        // One expense breaches the limit and drives the balance negative
        create_transaction(&server, account, food, Decimal::from(150), TransactionKind::Expense)
            .await;

        let notifications = account_notifications(&server, account).await;
        assert_eq!(notifications.len(), 2);
        let kinds: Vec<&str> = notifications
            .iter()
            .map(|n| n["type"].as_str().unwrap())
            .collect();
        assert!(kinds.contains(&"limit_exceed"));
        assert!(kinds.contains(&"low_balance"));
    }

    #[tokio::test]
    async fn test_mark_notification_read_is_idempotent() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let account = create_account(&server, "Wallet", AccountType::Cash, None).await;
        let food = create_category(&server, "Food", None).await;
        create_transaction(&server, account, food, Decimal::from(50), TransactionKind::Expense)
            .await;

        let notifications = account_notifications(&server, account).await;
        let id = notifications[0]["id"].as_i64().unwrap();

        let response = server.put(&format!("/api/notifications/{id}/read")).await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["is_read"], true);

        // Second call succeeds and leaves the flag set
        let response = server.put(&format!("/api/notifications/{id}/read")).await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["is_read"], true);

        let response = server.put("/api/notifications/999/read").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_transaction_list_filters() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let wallet = create_account(&server, "Wallet", AccountType::Cash, None).await;
        let bank = create_account(&server, "Bank", AccountType::Bank, None).await;
        let salary = create_category(&server, "Salary", None).await;

        create_transaction(&server, wallet, salary, Decimal::from(100), TransactionKind::Income)
            .await;
        create_transaction(&server, bank, salary, Decimal::from(200), TransactionKind::Income)
            .await;

        // Account filter
        let response = server
            .get(&format!("/api/transactions?account_id={wallet}"))
            .await;
        let list: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0]["amount"], "100");
        assert_eq!(list.data[0]["account_name"], "Wallet");
        assert_eq!(list.data[0]["category_name"], "Salary");

        // A range covering today matches everything
        let today = Utc::now().date_naive();
        let response = server
            .get(&format!("/api/transactions?startDate={today}&endDate={today}"))
            .await;
        let list: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(list.data.len(), 2);

        // A range ending yesterday matches nothing
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
        let response = server
            .get(&format!("/api/transactions?endDate={yesterday}"))
            .await;
        let list: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(list.data.is_empty());
    }

    #[tokio::test]
    async fn test_transaction_list_newest_first() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let wallet = create_account(&server, "Wallet", AccountType::Cash, None).await;
        let salary = create_category(&server, "Salary", None).await;

        let first = create_transaction(
            &server,
            wallet,
            salary,
            Decimal::from(1),
            TransactionKind::Income,
        )
        .await;
        let second = create_transaction(
            &server,
            wallet,
            salary,
            Decimal::from(2),
            TransactionKind::Income,
        )
        .await;

        let response = server.get("/api/transactions").await;
        let list: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(list.data[0]["id"], second["id"]);
        assert_eq!(list.data[1]["id"], first["id"]);
    }

    #[tokio::test]
    async fn test_delete_transaction() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let wallet = create_account(&server, "Wallet", AccountType::Cash, None).await;
        let salary = create_category(&server, "Salary", None).await;
        let created = create_transaction(
            &server,
            wallet,
            salary,
            Decimal::from(100),
            TransactionKind::Income,
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let response = server.delete(&format!("/api/transactions/{id}")).await;
        response.assert_status(StatusCode::OK);

        // Balance reflects the removal
        let response = server.get(&format!("/api/accounts/{wallet}")).await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["current_balance"], "0");

        let response = server.delete(&format!("/api/transactions/{id}")).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert_eq!(doc["info"]["title"], "PesaTrack API");
        assert!(doc["paths"]["/api/transactions"].is_object());
    }
}
