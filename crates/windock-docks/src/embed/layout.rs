use windock_common::{Dpi, Rect};

/// Frame for an embedded window filling `client`, scaled by the ratio of
/// container DPI to source DPI on each axis.
///
/// A zero DPI is treated as the 96 DPI baseline.
pub fn scaled_frame(client: Rect, container_dpi: Dpi, source_dpi: Dpi) -> Rect {
    let scale_x = axis_scale(container_dpi.x, source_dpi.x);
    let scale_y = axis_scale(container_dpi.y, source_dpi.y);
    Rect::new(
        client.x,
        client.y,
        (client.width as f32 * scale_x) as i32,
        (client.height as f32 * scale_y) as i32,
    )
}

fn axis_scale(container: u32, source: u32) -> f32 {
    let baseline = Dpi::BASELINE.x;
    let container = if container == 0 { baseline } else { container };
    let source = if source == 0 { baseline } else { source };
    container as f32 / source as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_dpi_fills_client_area() {
        let client = Rect::new(0, 0, 400, 300);
        let frame = scaled_frame(client, Dpi::uniform(144), Dpi::uniform(144));
        assert_eq!(frame, client);
    }

    #[test]
    fn higher_container_dpi_enlarges() {
        let frame = scaled_frame(Rect::new(0, 0, 400, 300), Dpi::uniform(192), Dpi::BASELINE);
        assert_eq!(frame, Rect::new(0, 0, 800, 600));
    }

    #[test]
    fn lower_container_dpi_shrinks_and_truncates() {
        let frame = scaled_frame(Rect::new(0, 0, 401, 301), Dpi::BASELINE, Dpi::uniform(192));
        assert_eq!(frame, Rect::new(0, 0, 200, 150));
    }

    #[test]
    fn axes_scale_independently() {
        let frame = scaled_frame(
            Rect::new(0, 0, 100, 100),
            Dpi { x: 192, y: 96 },
            Dpi::BASELINE,
        );
        assert_eq!(frame, Rect::new(0, 0, 200, 100));
    }

    #[test]
    fn zero_dpi_falls_back_to_baseline() {
        let frame = scaled_frame(Rect::new(5, 5, 100, 100), Dpi::uniform(0), Dpi::uniform(0));
        assert_eq!(frame, Rect::new(5, 5, 100, 100));
    }
}
