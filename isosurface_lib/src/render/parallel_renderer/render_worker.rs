use crossbeam::channel::{Receiver, Sender};

use crate::{camera::PerspectiveCamera, render::Renderer, volumetric::Volume};

use super::messages::{RenderTask, TileResult};

/// Render worker.
///
/// Takes tiles from the shared task queue until it is empty,
/// every rendered tile is sent back to master.
pub struct RenderWorker<'a, V>
where
    V: Volume,
{
    renderer_id: usize,
    renderer: &'a Renderer<V>,
    camera: &'a PerspectiveCamera,
    task_rec: Receiver<RenderTask>,
    result_send: Sender<TileResult>,
}

impl<'a, V> RenderWorker<'a, V>
where
    V: Volume,
{
    #[must_use]
    pub fn new(
        renderer_id: usize,
        renderer: &'a Renderer<V>,
        camera: &'a PerspectiveCamera,
        task_rec: Receiver<RenderTask>,
        result_send: Sender<TileResult>,
    ) -> Self {
        Self {
            renderer_id,
            renderer,
            camera,
            task_rec,
            result_send,
        }
    }

    /// Main loop, returns number of rendered tiles
    pub fn run(self) -> usize {
        let mut rendered = 0;

        for RenderTask { tile } in self.task_rec.iter() {
            let mut pixels = vec![0; tile.pixel_count() * 4];
            self.renderer.render_region(
                self.camera,
                tile.x..tile.x + tile.width,
                tile.y..tile.y + tile.height,
                &mut pixels,
            );

            if self.result_send.send(TileResult { tile, pixels }).is_err() {
                log::debug!("Render {}: master gone", self.renderer_id);
                break;
            }
            rendered += 1;
        }

        log::debug!("Render {}: done, {rendered} tiles", self.renderer_id);
        rendered
    }
}
