use nalgebra::{point, vector, Point3, Rotation3, Vector2, Vector3};

use crate::common::Ray;

/// Ray-casting camera.
///
/// Lives in object space of the volume, where the volume spans `<-0.5;0.5>^3`.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Position of the camera in object coordinates
    position: Point3<f32>,
    /// Up direction from the camera's perspective
    up: Vector3<f32>,
    /// Right direction from the camera's perspective
    right: Vector3<f32>,
    /// Direction of camera, unit vector
    direction: Vector3<f32>,
    /// Aspect ratio of image plane
    aspect: f32,
    /// Vertical Field of View in degrees
    fov_y: f32,
    /// Size of image plane
    img_plane_size: Vector2<f32>, // Calculated from fov_y
    /// Direction of ray passing through pixel \[0,0\]
    dir_00: Vector3<f32>, // upper left corner, in line with buffer convention
    /// Vector offset between two horizontally neighbouring pixels (such as: \[0,0\] -> \[1,0\])
    du: Vector3<f32>,
    /// Vector offset between two vertically neighbouring pixels (such as: \[0,0\] -> \[0,1\])
    dv: Vector3<f32>,
}

impl PerspectiveCamera {
    /// Construct new camera
    ///
    /// # Arguments
    ///
    /// * `position` - Position of the camera in object coordinates
    /// * `direction` - Looking direction of the camera
    ///
    /// # Notes
    ///
    /// The up direction is assumed to be 'up' (positive y axis)
    ///
    /// Default fov is 60 degrees, default aspect ratio is 1. To change it,
    /// call [`change_aspect_from_resolution`](PerspectiveCamera::change_aspect_from_resolution),
    /// [`change_fov`](PerspectiveCamera::change_fov), [`change_aspect`](PerspectiveCamera::change_aspect)
    pub fn new(position: Point3<f32>, direction: Vector3<f32>) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera {
            position,
            up: vector![0.0, 1.0, 0.0],
            right: vector![1.0, 0.0, 0.0],
            direction: direction.normalize(),
            aspect: 1.0,
            fov_y: 60.0,
            img_plane_size: vector![0.0, 0.0],
            dir_00: vector![0.0, 0.0, 0.0],
            du: vector![0.0, 0.0, 0.0],
            dv: vector![0.0, 0.0, 0.0],
        };
        camera.recalc_plane_size();
        camera.recalc_plane();
        camera
    }

    /// Camera at `position` looking at the center of the volume
    pub fn looking_at_center(position: Point3<f32>) -> PerspectiveCamera {
        PerspectiveCamera::new(position, point![0.0, 0.0, 0.0] - position)
    }

    /// Changes aspect ratio to match `(width, height)` resolution
    ///
    /// # Example
    ///
    /// ```
    /// use isosurface_lib::PerspectiveCamera;
    /// use nalgebra::{vector, point};
    ///
    /// let position = point![2.0, 0.0, 0.0];
    /// let direction = vector![-1.0, 0.0, 0.0];
    /// let mut camera = PerspectiveCamera::new(position, direction);
    ///
    /// let width = 1280;
    /// let height = 720;
    ///
    /// camera.change_aspect_from_resolution(width, height);
    /// // has the same effect as
    /// let aspect = (width as f32) / (height as f32);
    /// camera.change_aspect(aspect);
    /// ```
    pub fn change_aspect_from_resolution(&mut self, width: u16, height: u16) {
        let aspect = (width as f32) / (height as f32);
        self.change_aspect(aspect);
    }

    /// Change vertical FoV of camera
    ///
    /// # Arguments
    ///
    /// * `vertical_fov_deg` - vertical FoV in degrees
    pub fn change_fov(&mut self, vertical_fov_deg: f32) {
        assert!(vertical_fov_deg > 0.0 && vertical_fov_deg < 180.0);
        self.fov_y = vertical_fov_deg;
        self.recalc_plane_size();
        self.recalc_dudv();
    }

    /// Change aspect ratio of camera
    ///
    /// For example 1.7777 for 16:9 ratio
    pub fn change_aspect(&mut self, aspect_ratio: f32) {
        self.aspect = aspect_ratio;
        self.recalc_plane_size();
        self.recalc_dudv();
    }

    /// Set new position of camera
    pub fn set_pos(&mut self, pos: Point3<f32>) {
        self.position = pos;
    }

    /// Set new direction of camera
    pub fn set_direction(&mut self, direction: Vector3<f32>) {
        self.direction = direction;
        self.recalc_plane();
    }

    /// Apply rotation matrix to the camera
    /// This changes both position and direction, orbiting the volume center
    pub fn change_pos_matrix(&mut self, matrix: Rotation3<f32>) {
        self.position = matrix * self.position;
        self.direction = matrix * self.direction;

        self.recalc_plane();
    }

    pub fn get_position(&self) -> Point3<f32> {
        self.position
    }

    pub fn get_direction(&self) -> Vector3<f32> {
        self.direction
    }

    // Call when camera direction changed
    fn recalc_plane(&mut self) {
        self.direction = self.direction.normalize();
        self.recalc_up_right();
        self.recalc_dudv();
    }

    // Call when camera direction changed
    fn recalc_up_right(&mut self) {
        // Looking straight up or down, world up is useless
        let world_up = if self.direction.cross(&vector![0.0, 1.0, 0.0]).norm() < 1e-6 {
            vector![0.0, 0.0, -1.0]
        } else {
            vector![0.0, 1.0, 0.0]
        };
        self.right = self.direction.cross(&world_up).normalize();
        self.up = self.right.cross(&self.direction);
    }

    // Call when fov or aspect ratio changed
    fn recalc_plane_size(&mut self) {
        self.img_plane_size = vector![0.0, 2.0 * f32::tan(f32::to_radians(0.5 * self.fov_y))];
        self.img_plane_size.x = self.img_plane_size.y * self.aspect;
    }

    // Call when direction changed
    fn recalc_dudv(&mut self) {
        self.du = self.img_plane_size.x * self.direction.cross(&self.up).normalize();
        self.dv = -self.img_plane_size.y * self.du.cross(&self.direction).normalize(); // Notice '-' sign
        self.dir_00 = self.direction - 0.5 * self.du - 0.5 * self.dv;
    }

    /// Get ray originating in the camera position crossing view plane in coordinates `pixel_coord`
    ///
    /// # Arguments
    ///
    /// * pixel_coord - Coordinates in the range of `<0;1>x<0;1>`, point \[0,0\] being upper left corner
    pub fn get_ray(&self, pixel_coord: (f32, f32)) -> Ray {
        let dir = self.dir_00 + self.du * pixel_coord.0 + self.dv * pixel_coord.1;
        let dir = dir.normalize();
        Ray::new(self.position, dir)
    }
}
