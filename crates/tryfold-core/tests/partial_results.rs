use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use tryfold_core::impls::{FnFetcher, InMemoryFetcher};
use tryfold_core::{ApiError, BatchLoaderBuilder, FetchError, Fetcher};

fn blog_fetcher() -> InMemoryFetcher<String, String> {
    InMemoryFetcher::new()
        .with_value("1".to_string(), "data1".to_string())
        .with_value("2".to_string(), "data2".to_string())
        .with_failure("3".to_string(), FetchError::failed(500, "boom"))
}

#[tokio::test]
async fn batch_surfaces_all_obtainable_data_plus_errors() {
    let loader = BatchLoaderBuilder::new()
        .fetcher(blog_fetcher())
        .build()
        .unwrap();

    let keys = ["1", "3", "2"].map(String::from);
    let response = loader.load_response(keys).await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "data": {"1": "data1", "2": "data2"},
            "errors": [{"code": 500, "errorMessage": "fetch failed (code=500): boom"}]
        })
    );
}

#[tokio::test]
async fn unknown_keys_are_reported_as_404() {
    let loader = BatchLoaderBuilder::new()
        .fetcher(blog_fetcher())
        .build()
        .unwrap();

    let response = loader.load_response(["1".to_string(), "9".to_string()]).await;

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.errors, vec![ApiError::new(404, "no entry for key 9")]);
}

#[tokio::test]
async fn counts_always_add_up_to_the_batch_size() {
    let loader = BatchLoaderBuilder::<u64, u64>::new()
        .fetcher(FnFetcher::new(|key: &u64| {
            if key % 3 == 0 {
                Err(FetchError::failed(500, format!("{key}")))
            } else {
                Ok(*key)
            }
        }))
        .max_concurrency(3)
        .build()
        .unwrap();

    let agg = loader.load_all(0..50_u64).await;
    assert_eq!(agg.successes().len() + agg.failures().len(), 50);
    assert_eq!(agg.failures().len(), 17);
}

#[tokio::test]
async fn panic_in_one_fetch_does_not_lose_the_others() {
    let loader = BatchLoaderBuilder::<u32, String>::new()
        .fetcher(FnFetcher::new(|key: &u32| -> Result<String, FetchError> {
            if *key == 2 {
                panic!("fetch {key} blew up");
            }
            Ok(key.to_string())
        }))
        .build()
        .unwrap();

    let response = loader.load_response([1, 2, 3]).await;

    assert_eq!(response.data.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].code, 500);
    assert!(response.errors[0].error_message.contains("blew up"));
}

struct CountingFetcher {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

#[async_trait]
impl Fetcher<u32, u32> for CountingFetcher {
    async fn fetch(&self, key: &u32) -> Result<u32, FetchError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(*key)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn max_concurrency_bounds_in_flight_fetches() {
    let fetcher = Arc::new(CountingFetcher {
        in_flight: AtomicUsize::new(0),
        peak: AtomicUsize::new(0),
    });

    let loader = BatchLoaderBuilder::<u32, u32>::new()
        .shared_fetcher(fetcher.clone())
        .max_concurrency(2)
        .build()
        .unwrap();

    let agg = loader.load_all(0..10).await;

    assert!(agg.is_complete());
    assert_eq!(agg.len(), 10);
    assert!(fetcher.peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(fetcher.in_flight.load(Ordering::SeqCst), 0);
}
