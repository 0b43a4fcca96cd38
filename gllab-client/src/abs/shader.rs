//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! This module also provides the [`Uniform`] trait for writing uniform variables through a
//! resolved location.

use std::{cell::RefCell, collections::HashMap, sync::Arc};

use glam::{Mat4, Vec2, Vec3, Vec4};
use glow::HasContext;
use gllab_core::shader::{
    FALLBACK_FRAGMENT_SOURCE, FALLBACK_VERTEX_SOURCE, ShaderError, ShaderPolicy, ShaderStage,
};

/// Builds a shader program from `src/shaders/<name>/{vert,frag}.glsl`, applying the given
/// [`ShaderPolicy`] when it fails.
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $policy:expr) => {
        $crate::abs::load_program(
            &$gl,
            stringify!($name),
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
            $policy,
        )
    };
}

fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(
        gl: &Arc<glow::Context>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, ShaderError> {
        unsafe {
            let shader = gl
                .create_shader(gl_stage(stage))
                .map_err(|reason| ShaderError::Resource {
                    object: "shader",
                    reason,
                })?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(ShaderError::compile(stage, log));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be written to a uniform variable.
pub trait Uniform {
    /// Writes the value to the uniform at `location` of the program in use.
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for bool {
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self as i32) }
    }
}

impl Uniform for f32 {
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_f32(Some(location), *self) }
    }
}

impl Uniform for i32 {
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self) }
    }
}

impl Uniform for Vec2 {
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_2_f32(Some(location), self.x, self.y) }
    }
}

impl Uniform for Vec3 {
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_3_f32(Some(location), self.x, self.y, self.z) }
    }
}

impl Uniform for Vec4 {
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_4_f32(Some(location), self.x, self.y, self.z, self.w) }
    }
}

impl Uniform for Mat4 {
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref()) }
    }
}

impl<T: Uniform> Uniform for &T {
    fn write(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).write(gl, location);
    }
}

/// Represents a linked OpenGL shader program.
///
/// Uniform locations are looked up once per name and cached; names the driver does not know
/// (misspelled, or optimized out as inactive) are cached as `None` and writes to them are skipped.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
    locations: RefCell<HashMap<String, Option<glow::UniformLocation>>>,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders. The shaders are detached afterwards and
    /// may be dropped.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, ShaderError> {
        unsafe {
            let program = gl
                .create_program()
                .map_err(|reason| ShaderError::Resource {
                    object: "program",
                    reason,
                })?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                for shader in shaders {
                    gl.detach_shader(program, shader.id);
                }
                gl.delete_program(program);
                return Err(ShaderError::link(log));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
                locations: RefCell::new(HashMap::new()),
            })
        }
    }

    /// Compiles both stages from source and links them.
    pub fn from_sources(
        gl: &Arc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ShaderError> {
        let vert = Shader::new(gl, ShaderStage::Vertex, vertex_source)?;
        let frag = Shader::new(gl, ShaderStage::Fragment, fragment_source)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// The built-in flat magenta program used in place of a broken one.
    pub fn fallback(gl: &Arc<glow::Context>) -> Result<Self, ShaderError> {
        Self::from_sources(gl, FALLBACK_VERTEX_SOURCE, FALLBACK_FRAGMENT_SOURCE)
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Returns the location of the uniform called `name`, or `None` if the program has no
    /// active uniform by that name.
    pub fn locate_uniform(&self, name: &str) -> Option<glow::UniformLocation> {
        if let Some(location) = self.locations.borrow().get(name) {
            return location.clone();
        }

        let location = unsafe { self.gl.get_uniform_location(self.id, name) };
        if location.is_none() {
            log::trace!("Uniform '{}' is not active", name);
        }
        self.locations
            .borrow_mut()
            .insert(name.to_string(), location.clone());
        location
    }

    /// Sets a uniform variable in the shader program. The program must be in use.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        if let Some(location) = self.locate_uniform(name) {
            value.write(&self.gl, &location);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

/// Builds the program called `name` from its sources and applies `policy` if that fails.
pub fn load_program(
    gl: &Arc<glow::Context>,
    name: &str,
    vertex_source: &str,
    fragment_source: &str,
    policy: ShaderPolicy,
) -> Result<ShaderProgram, ShaderError> {
    let program = ShaderProgram::from_sources(gl, vertex_source, fragment_source);
    if program.is_ok() {
        log::debug!("Built shader program '{}'", name);
    }
    policy.resolve(name, program, || ShaderProgram::fallback(gl))
}
