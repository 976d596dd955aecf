use chance_rs::test::scripted_source::ScriptedSource;
use chance_rs::{chance, ChanceError, RngSource, WeightSet};
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_env_log::test;

#[test]
fn test_overflow_rejected_and_set_kept() {
    let mut set = WeightSet::new("default");
    set.add(60.0, "a").unwrap();
    let err = set.add(45.0, "b").unwrap_err();
    assert_eq!(err, ChanceError::WeightOverflow { excess: 5.0 });
    assert_eq!(set.remaining_chance(), 40.0);

    // Still usable after the rejection
    let mut source = ScriptedSource::new(vec![0.1]);
    assert_eq!(*set.sample(&mut source), "a");
}

#[test]
fn test_exhaustive_mass_never_defaults() {
    let set = WeightSet::new("X").with_item(100.0, "item").unwrap();
    let mut source = RngSource::new(StdRng::seed_from_u64(5));
    for _ in 0..10_000 {
        assert_eq!(*set.sample(&mut source), "item");
    }
}

#[test]
fn test_scripted_draws() {
    let set = WeightSet::try_from_items("C", vec![(50.0, "A"), (30.0, "B")]).unwrap();

    let mut source = ScriptedSource::new(vec![0.4, 0.5]);
    assert_eq!(*set.sample(&mut source), "A");
    assert_eq!(source.consumed(), 1);

    let mut source = ScriptedSource::new(vec![0.9, 0.95]);
    assert_eq!(*set.sample(&mut source), "C");
    assert_eq!(source.consumed(), 2);
}

#[test]
fn test_payloads_can_be_actions() {
    let mut set: WeightSet<fn(u32) -> u32> = WeightSet::new(|x| x);
    set.add(40.0, |x| x * 10).unwrap();
    set.add(40.0, |x| x + 1).unwrap();

    let mut source = ScriptedSource::new(vec![0.2]);
    assert_eq!((set.sample(&mut source))(5), 50);
    let mut source = ScriptedSource::new(vec![0.9, 0.5]);
    assert_eq!((set.sample(&mut source))(5), 6);
    let mut source = ScriptedSource::new(vec![0.9, 0.9]);
    assert_eq!((set.sample(&mut source))(5), 5);
}

#[test]
fn test_chance_helper_rate() {
    let mut source = RngSource::new(StdRng::seed_from_u64(9));
    let hits = (0..100_000).filter(|_| chance(25.0, &mut source)).count();
    let rate = hits as f64 / 100_000.0;
    assert!((rate - 0.25).abs() < 0.01, "rate was {}", rate);
}
