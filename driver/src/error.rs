use kernel::KernelError;

/// Lifts a backend error into the kernel taxonomy.
pub trait ConvertError: 'static + Sized {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
