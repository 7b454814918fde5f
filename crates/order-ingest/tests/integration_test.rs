use order_ingest::lifecycle::{OrderSystem, SystemConfig};
use order_ingest::metrics::MetricsRecorder;
use order_ingest::model::{CreateOrder, OrderId};
use order_ingest::order_actor::OrderError;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn fresh_system() -> (OrderSystem, Arc<MetricsRecorder>) {
    let metrics = Arc::new(MetricsRecorder::new());
    let system = OrderSystem::with_metrics(SystemConfig::default(), metrics.clone());
    (system, metrics)
}

/// Full end-to-end path with the real store actor.
#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (system, metrics) = fresh_system();
    assert!(Arc::ptr_eq(&system.metrics(), &metrics));
    let service = system.service();

    let created = service
        .create(CreateOrder::new("alice", 42.50))
        .await
        .expect("Failed to create order");

    assert_eq!(created.customer, "alice");
    assert_eq!(created.amount, 42.50);
    assert_eq!(created.id.as_str().len(), 32);
    assert!(created
        .id
        .as_str()
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    let fetched = service.get(&created.id).await.expect("Order not found");
    assert_eq!(fetched, created);

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.orders_created_total, 1);
    assert_eq!(snapshot.order_value.count, 1);
    assert_eq!(snapshot.order_value.sum, 42.50);
    assert_eq!(snapshot.order_value.min, Some(42.50));

    drop(service);
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_invalid_orders_change_nothing() {
    let (system, metrics) = fresh_system();
    let service = system.service();

    service.create(CreateOrder::new("bob", 5.0)).await.unwrap();

    for request in [
        CreateOrder::new("", 10.0),
        CreateOrder::new(" \t ", 10.0),
        CreateOrder::new("carol", -1.0),
        CreateOrder::new("carol", f64::NAN),
        CreateOrder::new("carol", f64::INFINITY),
    ] {
        let result = service.create(request).await;
        assert!(matches!(result, Err(OrderError::Validation(_))), "{result:?}");
    }

    assert_eq!(service.count().await.unwrap(), 1);
    assert_eq!(metrics.orders_created(), 1);
    assert_eq!(metrics.snapshot().order_value.count, 1);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (system, metrics) = fresh_system();
    let service = system.service();

    let id = OrderId::from("deadbeefdeadbeefdeadbeefdeadbeef");
    let result = service.get(&id).await;
    assert_eq!(result, Err(OrderError::NotFound(id)));

    // Reads are metrics-silent
    assert_eq!(metrics.orders_created(), 0);
    assert!(service.health_check().await.is_ok());
}

/// Many concurrent creates: every id is unique, every order is readable, and the
/// metrics account for exactly the submitted amounts.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates() {
    let (system, metrics) = fresh_system();

    let mut handles = vec![];
    for i in 0..200u32 {
        let service = system.service();
        handles.push(tokio::spawn(async move {
            let amount = f64::from(i % 40) * 0.5;
            service
                .create(CreateOrder::new(format!("customer_{}", i % 7), amount))
                .await
        }));
    }

    let mut views = vec![];
    for handle in handles {
        views.push(handle.await.unwrap().expect("create failed"));
    }

    let ids: HashSet<_> = views.iter().map(|v| v.id.clone()).collect();
    assert_eq!(ids.len(), 200, "ids must be unique");

    let service = system.service();
    for view in &views {
        assert_eq!(&service.get(&view.id).await.unwrap(), view);
    }
    assert_eq!(service.count().await.unwrap(), 200);

    let expected_sum: f64 = (0..200u32).map(|i| f64::from(i % 40) * 0.5).sum();
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.orders_created_total, 200);
    assert_eq!(snapshot.order_value.count, 200);
    assert_eq!(snapshot.order_value.sum, expected_sum);
    assert_eq!(snapshot.order_value.min, Some(0.0));
    assert_eq!(snapshot.order_value.max, Some(19.5));
    // 0.0 and 0.5 (5 each) fall in le="1", along with 1.0 (5 more)
    assert_eq!(snapshot.order_value.buckets[0].count, 15);

    drop(service);
    system.shutdown().await.unwrap();
}

/// Callers that give up on `create` must not leave stored orders uncounted.
#[tokio::test]
async fn test_abandoned_creates_are_still_counted() {
    let (system, metrics) = fresh_system();
    let service = system.service();

    for i in 0..50u32 {
        let request = CreateOrder::new(format!("impatient_{i}"), f64::from(i));
        // Dropped at its first await point
        let _ = tokio::time::timeout(Duration::from_nanos(1), service.create(request)).await;
    }

    let mut stored = 0;
    for _ in 0..100 {
        stored = service.count().await.unwrap();
        // The metric lands just after the insert, so wait for both
        if stored == 50 && metrics.orders_created() == 50 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(stored, 50);
    assert_eq!(metrics.orders_created(), stored as u64);
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.order_value.count, 50);
    assert_eq!(snapshot.order_value.sum, (0..50u32).map(f64::from).sum::<f64>());

    drop(service);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_buckets_and_rendering() {
    let config = SystemConfig::from_json(r#"{ "channel_capacity": 2, "value_buckets": [10, 100] }"#)
        .unwrap();
    let system = OrderSystem::with_config(config);
    let service = system.service();
    assert!(!Arc::ptr_eq(&system.metrics(), &MetricsRecorder::global()));

    service.create(CreateOrder::new("dave", 7.0)).await.unwrap();
    service.create(CreateOrder::new("erin", 70.0)).await.unwrap();
    service.create(CreateOrder::new("frank", 700.0)).await.unwrap();

    let text = system.metrics().snapshot().render_prometheus();
    assert!(text.contains("orders_created_total 3\n"));
    assert!(text.contains("order_value_amount_bucket{le=\"10\"} 1\n"));
    assert!(text.contains("order_value_amount_bucket{le=\"100\"} 2\n"));
    assert!(text.contains("order_value_amount_bucket{le=\"+Inf\"} 3\n"));
    assert!(text.contains("order_value_amount_sum 777\n"));

    drop(service);
    system.shutdown().await.unwrap();
}
