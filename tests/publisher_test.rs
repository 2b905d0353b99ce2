use async_trait::async_trait;
use news_digest::types::Result;
use news_digest::{Digest, DigestSink, Publisher, SelectedItem};
use std::sync::{Arc, Mutex};

/// Test sink that records every digest it is handed.
#[derive(Clone, Default)]
struct RecordingSink {
    deliveries: Arc<Mutex<Vec<Digest>>>,
}

impl RecordingSink {
    fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

#[async_trait]
impl DigestSink for RecordingSink {
    async fn deliver(&self, digest: &Digest) -> Result<()> {
        self.deliveries.lock().unwrap().push(digest.clone());
        Ok(())
    }
}

fn item(title: &str) -> SelectedItem {
    SelectedItem {
        title: title.to_string(),
        link: format!("https://example.com/{title}"),
        summary: "A summary.".to_string(),
    }
}

#[tokio::test]
async fn empty_digest_is_a_no_op() {
    let sink = RecordingSink::default();
    let publisher = Publisher::new(Box::new(sink.clone()));

    let delivered = publisher.publish(&Digest::default()).await.unwrap();

    assert!(!delivered);
    assert_eq!(sink.delivery_count(), 0, "sink must not be called");
}

#[tokio::test]
async fn digest_is_delivered_once_as_a_whole() {
    let sink = RecordingSink::default();
    let publisher = Publisher::new(Box::new(sink.clone()));

    let digest = Digest {
        items: vec![item("one"), item("two")],
    };
    let delivered = publisher.publish(&digest).await.unwrap();

    assert!(delivered);
    assert_eq!(sink.delivery_count(), 1);

    let recorded = sink.deliveries.lock().unwrap();
    assert_eq!(recorded[0].items, digest.items);
}
