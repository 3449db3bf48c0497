mod advice;
mod common;
mod training;
