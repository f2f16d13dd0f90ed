use anyhow::Result;
use rondo::core::SeqConfig;
use rondo::emit::{Emission, EmitHandle, FuncEmit, SeqCollector};
use rondo::ring::{Ring, SyncBridge};
use rondo::seq::Sequencer;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[test]
fn test_seq_stop_before_start() -> Result<()> {
    let config = SeqConfig::new(3, 100)?;
    let sequencer = Sequencer::new(config);
    sequencer.stopper().stop();
    let collector = SeqCollector::new();
    sequencer.launch(EmitHandle::new(collector.clone()))?;
    assert!(collector.take()?.is_empty());
    Ok(())
}

#[test]
fn test_seq_stop_midway() -> Result<()> {
    let total = 1_000_000;
    let config = SeqConfig::new(3, total)?;
    let sequencer = Sequencer::new(config);
    let stopper = sequencer.stopper();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();
    let emitter = EmitHandle::new(FuncEmit(move |emission: Emission| {
        // Pace the round so the stop lands mid-run.
        thread::sleep(Duration::from_millis(1));
        let mut records = sink.lock().expect("the record sink is poisoned");
        records.push(emission);
        Ok(())
    }));
    let runner = thread::spawn(move || sequencer.launch(emitter));
    thread::sleep(Duration::from_millis(20));
    stopper.stop();
    runner.join().expect("the launcher thread panicked")?;
    let records = recorded.lock().expect("the record sink is poisoned").clone();
    assert!(!records.is_empty());
    assert!((records.len() as u64) < total);
    for (position, emission) in records.iter().enumerate() {
        assert_eq!(emission.value, position as u64);
        assert_eq!(emission.worker.index(), position % 3);
    }
    Ok(())
}

#[tokio::test]
async fn test_ring_stop_before_start() -> Result<()> {
    let config = SeqConfig::new(3, 100)?;
    let ring = Ring::new(config);
    ring.stopper().stop();
    let collector = SeqCollector::new();
    ring.launch(SyncBridge::new(collector.clone())).await?;
    assert!(collector.take()?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_ring_stop_from_observer() -> Result<()> {
    let config = SeqConfig::new(3, 1_000_000)?;
    let ring = Ring::new(config);
    let stopper = ring.stopper();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();
    let emitter = FuncEmit(move |emission: Emission| {
        let mut records = sink.lock().expect("the record sink is poisoned");
        records.push(emission.value);
        if emission.value == 4 {
            stopper.stop();
        }
        Ok(())
    });
    ring.launch(SyncBridge::new(emitter)).await?;
    let values = recorded.lock().expect("the record sink is poisoned").clone();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
    Ok(())
}
