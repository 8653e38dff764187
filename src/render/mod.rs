pub(crate) mod blend;
pub(crate) mod canvas;
pub(crate) mod compositor;
pub(crate) mod glyphs;
pub(crate) mod pipeline;
pub(crate) mod raster;
