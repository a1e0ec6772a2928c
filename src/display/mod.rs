mod formatter;

pub use formatter::PipelineFormatter;
