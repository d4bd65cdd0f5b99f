#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpgen::*;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let width = u32::from_le_bytes(data[0..4].try_into().unwrap());
    let height = u32::from_le_bytes(data[4..8].try_into().unwrap());

    // Any dimensions must either be rejected or produce consistent sizes
    let Ok(layout) = BitmapLayout::new(width, height) else {
        return;
    };
    assert_eq!(layout.row_stride() % 4, 0);
    assert_eq!(layout.file_size(), HEADER_SIZE + layout.pixel_data_size());

    // Keep actual encoding small
    let limits = Limits {
        max_memory_bytes: Some(1 << 20),
        ..Default::default()
    };
    let pattern = &data[8..];
    let source = |i: usize| pattern.get(i % pattern.len().max(1)).copied().unwrap_or(0);
    let Ok(encoded) = EncodeRequest::new(width, height)
        .with_limits(&limits)
        .encode(source, enough::Unstoppable)
    else {
        return;
    };

    assert_eq!(encoded.len(), layout.file_size() as usize);
    assert_eq!(&encoded[0..2], b"BM");
    assert_eq!(i32::from_le_bytes(encoded[18..22].try_into().unwrap()), width as i32);
    assert_eq!(i32::from_le_bytes(encoded[22..26].try_into().unwrap()), height as i32);
});
