//local shortcuts

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Multi-producer.
///
/// Can be cloned and moved to any thread.
#[derive(Debug)]
pub struct MessageSender<T>
{
    sender: crossbeam::channel::Sender<T>
}

impl<T> MessageSender<T>
{
    fn new(sender: crossbeam::channel::Sender<T>) -> MessageSender<T>
    {
        MessageSender{ sender }
    }

    /// Send a message.
    /// Returns `Err` if every receiver has been dropped.
    pub fn send(&self, message: T) -> Result<(), crossbeam::channel::SendError<T>>
    {
        self.sender.send(message)
    }
}

impl<T> Clone for MessageSender<T>
{
    fn clone(&self) -> Self
    {
        MessageSender{ sender: self.sender.clone() }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Single consumer, owned by the context that drains it.
#[derive(Debug)]
pub struct MessageReceiver<T>
{
    receiver: crossbeam::channel::Receiver<T>
}

impl<T> MessageReceiver<T>
{
    fn new(receiver: crossbeam::channel::Receiver<T>) -> MessageReceiver<T>
    {
        MessageReceiver{ receiver }
    }

    /// Get next available message.
    /// Returns `None` if there are no available messages or the channel is closed.
    pub fn try_get_next(&self) -> Option<T>
    {
        let Ok(msg) = self.receiver.try_recv() else { return None; };
        Some(msg)
    }
}

//-------------------------------------------------------------------------------------------------------------------

pub fn new_message_channel<T>() -> (MessageSender<T>, MessageReceiver<T>)
{
    let (channel_sender, channel_receiver) = crossbeam::channel::unbounded::<T>();
    (MessageSender::<T>::new(channel_sender), MessageReceiver::<T>::new(channel_receiver))
}

//-------------------------------------------------------------------------------------------------------------------
