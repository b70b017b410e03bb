use mem_window::{MemWindow, WindowError};

fn window(backing: &mut [u8]) -> MemWindow {
    // SAFETY: each test's backing array outlives its window, and the
    // memory is only touched through the window while it exists.
    unsafe { MemWindow::new(backing.as_mut_ptr(), backing.len()) }
}

#[test]
fn write_then_read_round_trips() {
    let mut backing = [0u8; 32];
    let mut win = window(&mut backing);

    win.write(0, &[1, 2, 3, 4]).unwrap();
    let mut buf = [0u8; 4];
    win.read(0, &mut buf).unwrap();
    assert_eq!(buf, [1, 2, 3, 4]);
}

#[test]
fn offsets_up_to_the_boundary_are_valid() {
    let mut backing = [0u8; 8];
    let mut win = window(&mut backing);

    win.write(6, &[0xaa, 0xbb]).unwrap();
    let mut buf = [0u8; 2];
    win.read(6, &mut buf).unwrap();
    assert_eq!(buf, [0xaa, 0xbb]);
}

#[test]
fn access_past_the_window_is_rejected() {
    let mut backing = [0u8; 8];
    let mut win = window(&mut backing);

    assert_eq!(win.write(7, &[0, 0]), Err(WindowError::OutOfWindow));
    let mut buf = [0u8; 1];
    assert_eq!(win.read(8, &mut buf), Err(WindowError::OutOfWindow));

    // A rejected write leaves the window contents alone.
    let mut all = [0u8; 8];
    win.read(0, &mut all).unwrap();
    assert_eq!(all, [0u8; 8]);
}

#[test]
fn offset_overflow_is_rejected() {
    let mut backing = [0u8; 8];
    let win = window(&mut backing);

    let mut buf = [0u8; 2];
    assert_eq!(win.read(usize::MAX, &mut buf), Err(WindowError::OutOfWindow));
}

#[test]
fn zero_length_access_inside_the_window_succeeds() {
    let mut backing = [7u8; 4];
    let mut win = window(&mut backing);

    // Unlike a bus transfer there is no minimum length here; an empty
    // access at the very end of the window is still in bounds.
    win.write(4, &[]).unwrap();
    let mut buf: [u8; 0] = [];
    win.read(4, &mut buf).unwrap();
}

#[test]
fn window_reports_its_extent() {
    let mut backing = [0u8; 16];
    let win = window(&mut backing);
    assert_eq!(win.len(), 16);
    assert!(!win.is_empty());
}
