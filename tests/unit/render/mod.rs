mod font;
mod text;
