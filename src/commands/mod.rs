pub mod outpaint;
pub mod prepare;
pub mod validate;
