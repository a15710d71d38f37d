use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    camera::PerspectiveCamera,
    error::{OptionsError, RenderError},
    render::Renderer,
    volumetric::Volume,
};

use super::{
    messages::{RenderTask, Tile, TileResult},
    render_worker::RenderWorker,
};

/// Side of square tile in pixels
pub const DEFAULT_TILE_SIDE: u16 = 16;

/// Multi-threaded renderer.
///
/// Frame is split into tiles, workers take tiles from a shared queue.
/// Result is identical to [`Renderer::render`], pixels do not depend on each other.
pub struct ParallelRenderer<V>
where
    V: Volume + Sync,
{
    renderer: Renderer<V>,
    worker_count: usize,
    tile_side: u16,
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<V> ParallelRenderer<V>
where
    V: Volume + Sync,
{
    /// Construct new `ParallelRenderer`.
    pub fn new(
        renderer: Renderer<V>,
        worker_count: usize,
        tile_side: u16,
    ) -> Result<Self, OptionsError> {
        if worker_count == 0 || tile_side == 0 {
            return Err(OptionsError::Parallelism);
        }

        let elements = renderer.get_render_options().pixel_count();
        let buffer = Arc::new(Mutex::new(vec![0; elements * 4]));

        log::info!("Parallel renderer | {worker_count} workers | tile side {tile_side}");

        Ok(Self {
            renderer,
            worker_count,
            tile_side,
            buffer,
        })
    }

    /// One worker per logical CPU, default tile side
    pub fn with_default_workers(renderer: Renderer<V>) -> Self {
        let elements = renderer.get_render_options().pixel_count();
        Self {
            renderer,
            worker_count: usize::max(num_cpus::get(), 1),
            tile_side: DEFAULT_TILE_SIDE,
            buffer: Arc::new(Mutex::new(vec![0; elements * 4])),
        }
    }

    pub fn get_renderer(&self) -> &Renderer<V> {
        &self.renderer
    }

    pub fn get_renderer_mut(&mut self) -> &mut Renderer<V> {
        &mut self.renderer
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Framebuffer of the last frame, RGBA8
    pub fn get_shared_buffer(&self) -> Arc<Mutex<Vec<u8>>> {
        self.buffer.clone()
    }

    /// Render frame into `buffer`
    pub fn render_to_buffer(
        &self,
        camera: &PerspectiveCamera,
        buffer: &mut [u8],
    ) -> Result<(), RenderError> {
        self.render(camera)?;
        let frame = self.buffer.lock();
        let len = usize::min(frame.len(), buffer.len());
        buffer[..len].copy_from_slice(&frame[..len]);
        Ok(())
    }

    /// Render frame into shared buffer.
    /// Blocks until all tiles are done.
    pub fn render(&self, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        let resolution = self.renderer.get_render_options().resolution;
        let tiles = Tile::split(resolution, self.tile_side);
        let tile_count = tiles.len();

        log::debug!(
            "Master : {}x{} frame, {tile_count} tiles",
            resolution.x,
            resolution.y
        );

        // All tasks are queued up front, workers quit once the queue is drained
        let (task_send, task_rec) = crossbeam::channel::unbounded();
        for tile in tiles {
            task_send
                .send(RenderTask { tile })
                .map_err(|_| RenderError::Disconnected)?;
        }
        drop(task_send);

        let (result_send, result_rec) = crossbeam::channel::unbounded::<TileResult>();

        let mut buffer = self.buffer.lock();
        buffer.resize(resolution.x as usize * resolution.y as usize * 4, 0);
        let row_len = resolution.x as usize * 4;

        // Scope assures threads will be joined before exiting the scope
        let received = crossbeam::scope(|s| -> Result<usize, RenderError> {
            for id in 0..self.worker_count {
                let worker = RenderWorker::new(
                    id,
                    &self.renderer,
                    camera,
                    task_rec.clone(),
                    result_send.clone(),
                );
                s.builder()
                    .name(format!("Ren{id}"))
                    .spawn(move |_| worker.run())?;
            }
            // Only workers hold senders now, iteration ends when all of them finish
            drop(result_send);

            let mut received = 0;
            for TileResult { tile, pixels } in result_rec.iter() {
                let tile_row_len = tile.width * 4;
                for (row, src) in pixels.chunks_exact(tile_row_len).enumerate() {
                    let start = (tile.y + row) * row_len + tile.x * 4;
                    buffer[start..start + tile_row_len].copy_from_slice(src);
                }
                received += 1;
            }
            Ok(received)
        })
        .map_err(|_| RenderError::WorkerPanic)??;

        if received != tile_count {
            return Err(RenderError::Disconnected);
        }

        log::debug!("Master : frame done");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use nalgebra::{point, vector};

    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn matches_serial() {
        let camera = PerspectiveCamera::looking_at_center(point![1.2, 0.8, 1.5]);

        let serial = sphere_renderer(render_options(37));
        let mut expected = vec![0; 37 * 37 * 4];
        serial.render(&camera, &mut expected);

        let parallel = ParallelRenderer::new(sphere_renderer(render_options(37)), 3, 8).unwrap();
        let mut actual = vec![0; 37 * 37 * 4];
        parallel.render_to_buffer(&camera, &mut actual).unwrap();

        assert_eq!(expected, actual);
        assert!(actual.chunks_exact(4).any(|p| p[3] == 255));
    }

    #[test]
    fn resolution_change() {
        let camera = PerspectiveCamera::looking_at_center(point![0.0, 0.0, 2.0]);
        let mut parallel = ParallelRenderer::with_default_workers(sphere_renderer(render_options(8)));
        parallel
            .get_renderer_mut()
            .set_render_resolution(vector![20, 10]);
        parallel.render(&camera).unwrap();

        assert_eq!(parallel.get_shared_buffer().lock().len(), 20 * 10 * 4);
    }

    #[test]
    fn rejects_zero_workers() {
        let res = ParallelRenderer::new(sphere_renderer(render_options(8)), 0, 8);
        assert!(matches!(res, Err(OptionsError::Parallelism)));
    }
}
