use anyhow::{anyhow, Result};
use rondo_core::WorkerId;
use rondo_emit::kit::{Emission, Emit, EmitHandle, EmptyEmit, FuncEmit, SeqCollector};
use std::sync::{Arc, Mutex};

#[test]
fn test_empty_emit() -> Result<()> {
    let emitter = EmptyEmit;
    emitter.emit(Emission::new(WorkerId::from(0), 0))?;
    Ok(())
}

#[test]
fn test_collector_take_once() -> Result<()> {
    let collector = SeqCollector::new();
    collector.emit(Emission::new(WorkerId::from(0), 0))?;
    collector.emit(Emission::new(WorkerId::from(1), 1))?;
    let sequence = collector.take()?;
    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence[1].value, 1);
    assert!(collector.take().is_err());
    assert!(collector.emit(Emission::new(WorkerId::from(2), 2)).is_err());
    Ok(())
}

#[test]
fn test_reform() -> Result<()> {
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = values.clone();
    let handle = EmitHandle::new(FuncEmit(move |value: u64| {
        let mut values = sink.lock().map_err(|_| anyhow!("the sink is poisoned"))?;
        values.push(value);
        Ok(())
    }));
    let emissions: EmitHandle<Emission> = handle.reform(|emission: Emission| emission.value);
    emissions.emit(Emission::new(WorkerId::from(0), 7))?;
    assert_eq!(values.lock().expect("the sink is poisoned").clone(), vec![7]);
    Ok(())
}
