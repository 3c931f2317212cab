use approx::assert_abs_diff_eq;
use synth_core::{run_series, OilSimulator, SimulatorConfig, WellOptions};

fn field(wells: &[(&str, i64)]) -> OilSimulator {
    let mut sim = OilSimulator::default();
    for &(name, seed) in wells {
        sim.add_well(name, seed, &WellOptions::default());
    }
    sim.add_block("1,1,1", 17, 0.2);
    sim
}

#[test]
fn identical_setups_are_bit_identical() {
    let mut a = field(&[("P1", 21), ("P2", 22)]);
    let mut b = field(&[("P1", 21), ("P2", 22)]);
    for _ in 0..25 {
        a.step(0.04);
        b.step(0.04);
        assert_eq!(a.report(), b.report());
    }
}

#[test]
fn cumulative_totals_never_decrease() {
    let mut sim = field(&[("P1", 5), ("P2", 6), ("P3", 7)]);
    let (mut fopt, mut fgpt, mut fwpt) = (0.0, 0.0, 0.0);
    for _ in 0..40 {
        sim.step(0.03);
        assert!(sim.fopt() >= fopt);
        assert!(sim.fgpt() >= fgpt);
        assert!(sim.fwpt() >= fwpt);
        fopt = sim.fopt();
        fgpt = sim.fgpt();
        fwpt = sim.fwpt();
    }
}

#[test]
fn in_place_volumes_stay_non_negative() {
    let mut sim = OilSimulator::new(1.0, 1.0, 1.0);
    sim.add_well("P", 12, &WellOptions::default());
    for _ in 0..30 {
        sim.step(0.05);
        assert!(sim.foip() >= 0.0);
        assert!(sim.fgip() >= 0.0);
        assert!(sim.fwip() >= 0.0);
    }
}

#[test]
fn conservation_holds_until_depletion() {
    let mut sim = field(&[("P1", 31), ("P2", 32)]);
    for _ in 0..20 {
        sim.step(0.05);
        assert!(sim.foip() > 0.0);
        assert_abs_diff_eq!(sim.foip(), sim.ooip() - sim.fopt(), epsilon = 1e-9);
        assert_abs_diff_eq!(sim.fgip(), sim.goip() - sim.fgpt(), epsilon = 1e-9);
        assert_abs_diff_eq!(sim.fwip(), sim.woip() - sim.fwpt(), epsilon = 1e-9);
    }
}

#[test]
fn single_well_rates_equal_field_rates() {
    let mut sim = field(&[("OP1", 44)]);
    for _ in 0..15 {
        sim.step(0.07);
        assert_eq!(sim.fopr(), sim.opr("OP1").unwrap());
        assert_eq!(sim.fgpr(), sim.gpr("OP1").unwrap());
        assert_eq!(sim.fwpr(), sim.wpr("OP1").unwrap());
        assert_eq!(sim.fgor(), sim.gor("OP1").unwrap());
        assert_eq!(sim.fwct(), sim.wct("OP1").unwrap());
    }
}

#[test]
fn ratios_respect_rate_floor() {
    let mut sim = field(&[("P1", 2), ("P2", 3)]);
    for _ in 0..30 {
        sim.step(0.04);
        for well in ["P1", "P2"] {
            let opr = sim.opr(well).unwrap();
            let gpr = sim.gpr(well).unwrap();
            // max(gpr, 0.1) / max(opr, 0.1) is bounded by the floor on both sides.
            assert!(sim.gor(well).unwrap() <= gpr.max(0.1) / 0.1 + 1e-12);
            assert!(sim.gor(well).unwrap() >= 0.1 / opr.max(0.1) - 1e-12);
            let wct = sim.wct(well).unwrap();
            assert!((0.0..1.0).contains(&wct), "water cut {wct} outside [0, 1)");
        }
    }
}

#[test]
fn pressures_are_cut_off_at_zero() {
    let mut sim = field(&[]);
    for _ in 0..40 {
        sim.step(0.03);
        assert!(sim.bpr("1,1,1").unwrap() >= 0.0);
    }
}

#[test]
fn series_runner_matches_manual_stepping() {
    let config = SimulatorConfig::reference();
    let series = run_series(&config, 10, 0.1);
    let mut sim = OilSimulator::from_config(&config);
    for report in &series {
        sim.step(0.1);
        assert_eq!(report, &sim.report());
    }
    assert_abs_diff_eq!(series[9].field.fopt, 2.885645185279072, epsilon = 1e-7);
}
