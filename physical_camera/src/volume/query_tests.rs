use crate::error::Error;
use super::*;

#[test]
fn test_volume_overrides_constructors() {
    let exposure = VolumeOverrides::exposure(true);
    assert!(exposure.has_exposure_override);
    assert!(exposure.exposure_uses_physical_camera);
    assert!(!exposure.has_depth_of_field_override);

    let dof = VolumeOverrides::depth_of_field(false);
    assert!(dof.has_depth_of_field_override);
    assert!(!dof.dof_uses_physical_camera);
    assert!(!dof.has_exposure_override);

    let both = VolumeOverrides::default().with_exposure(false).with_depth_of_field(true);
    assert!(both.has_exposure_override);
    assert!(!both.exposure_uses_physical_camera);
    assert!(both.dof_uses_physical_camera);
}

#[test]
fn test_static_query_returns_volumes_in_order() {
    let query = StaticVolumeQuery::new(vec![
        VolumeOverrides::exposure(false),
        VolumeOverrides::depth_of_field(true),
    ]);

    let volumes = query.active_volume_overrides().unwrap();
    assert_eq!(volumes.len(), 2);
    assert_eq!(volumes[0], VolumeOverrides::exposure(false));
    assert_eq!(volumes[1], VolumeOverrides::depth_of_field(true));
}

#[test]
fn test_static_query_empty() {
    assert!(StaticVolumeQuery::empty().active_volume_overrides().unwrap().is_empty());
}

#[test]
fn test_static_query_unavailable() {
    let result = StaticVolumeQuery::unavailable().active_volume_overrides();
    assert!(matches!(result, Err(Error::CollaboratorUnavailable(_))));
}

#[test]
fn test_push_makes_unavailable_query_available() {
    let mut query = StaticVolumeQuery::unavailable();
    query.push(VolumeOverrides::exposure(true));
    assert_eq!(query.active_volume_overrides().unwrap().len(), 1);
}
