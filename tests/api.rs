//! Facade-level smoke tests: the path a consuming tool actually takes, from
//! raw form strings through validation into each engine.

use netsizer::{
    validation, LifeSciencesSizer, PlatformModel, RawPlannerRequest, SizingError,
    StorageFabricPlanner,
};

#[test]
fn test_form_to_sizing_estimate() {
    let workload = validation::resolve_workload("cryoem").unwrap();
    let instruments = validation::positive_count(3, "instrument count").unwrap();
    let speed = validation::interface_speed(100).unwrap();

    let estimate = LifeSciencesSizer::new().estimate(workload, instruments, 120, speed);

    assert_eq!(estimate.total_gbps, 24.0);
    assert_eq!(estimate.burst_gbps, 48.0);
    assert_eq!(estimate.optic.id, "dr");
}

#[test]
fn test_form_to_fabric_plan() {
    let request = RawPlannerRequest {
        design_preset: "2-4-3-200".to_string(),
        port_speed: "200G".to_string(),
        host_count: 32,
        protocol: "NVMe-oF RoCE v2".to_string(),
        oversubscription: "3:1".to_string(),
        traffic_mix: "Balanced".to_string(),
        latency_tier: "Standard".to_string(),
        redundancy: "Dual-fabric".to_string(),
    };

    let inputs = request.into_inputs().unwrap();
    let plan = StorageFabricPlanner::new().plan(&inputs);

    assert_eq!(plan.platform.model, PlatformModel::Model7280R3);
    assert_eq!(plan.topology, "Dual-leaf + spine");
    assert_eq!(plan.port_plan.spine_uplinks_required, 22);
}

#[test]
fn test_malformed_form_is_rejected_before_the_engine() {
    assert!(matches!(
        validation::resolve_workload("radiology"),
        Err(SizingError::UnknownWorkload(_))
    ));
    assert!(matches!(
        validation::interface_speed(40),
        Err(SizingError::UnsupportedInterfaceSpeed(40))
    ));
}
