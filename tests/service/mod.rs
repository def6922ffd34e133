mod appearance;
mod resolver;
