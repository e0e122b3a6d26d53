mod array;
mod scalar;
mod text;
mod unsupported;
