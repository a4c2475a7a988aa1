use se_web::{memory, objects, BridgeError};

#[test]
fn host_adds_objects_and_manages_memory() {
    for id in [3, 7, 9] {
        se_web::add_object(id).unwrap();
    }
    assert_eq!(se_web::object_count(), 3);
    assert_eq!(se_web::object_ids(), vec![3, 7, 9]);
    assert_eq!(se_web::object_at(1).unwrap(), Some(7));

    let ptr = se_web::request_memory(64).unwrap();
    assert_ne!(ptr, 0);
    se_web::free_memory(ptr).unwrap();

    // the freed pointer is dead until a fresh allocation hands one out
    assert_eq!(
        memory::free_memory(ptr as *mut u8),
        Err(BridgeError::UnknownAllocation(ptr))
    );
    let fresh = se_web::request_memory(64).unwrap();
    se_web::free_memory(fresh).unwrap();
    assert_eq!(memory::live_allocations(), 0);

    assert_eq!(se_web::remove_objects(), 3);
    assert_eq!(objects::object_count(), 0);
}

#[test]
fn object_list_grows_past_initial_capacity() {
    for id in 0..100 {
        objects::add_object(id).unwrap();
    }
    let ids = objects::object_ids();
    assert_eq!(ids.len(), 100);
    assert!(ids.iter().copied().eq(0..100));
    assert_eq!(objects::remove_objects(), 100);
}
