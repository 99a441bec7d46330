use crate::TimeSeries;
use std::num::NonZeroU32;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Opens the viewer window and blocks until the user closes it,
/// then the process exits. The chart is re-rendered on every resize.
pub fn show(series: TimeSeries) -> ! {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("csvchart")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .expect("resize surface");
                let mut rgb = vec![0u8; (w as usize) * (h as usize) * 3];
                series.draw_into(&mut rgb, w, h).expect("draw chart");
                // pack rgb888 into the 0RGB u32 pixels softbuffer expects
                let mut frame = surface.buffer_mut().expect("frame");
                let max_px = frame.len().min(rgb.len() / 3);
                for (i, px) in rgb.chunks_exact(3).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    frame[i] = (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {:?}", e);
                }
            }
            _ => {}
        }
    });
}
